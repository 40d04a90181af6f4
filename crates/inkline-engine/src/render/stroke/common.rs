//! Shared GPU types and utilities used by the stroke renderers.

use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

use super::RenderCtx;

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

// ── globals uniform ───────────────────────────────────────────────────────

/// Uniform block shared by all stroke shaders: viewport for the logical-px →
/// NDC conversion, plus the flat stroke color.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct StrokeGlobals {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment for the vec4 that follows
    pub color: [f32; 4],
}

impl StrokeGlobals {
    pub(super) fn new(viewport: crate::coords::Viewport, color: Color) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
            color: color.to_array(),
        }
    }
}

/// `wgpu` minimum binding size for [`StrokeGlobals`].
///
/// The struct is 32 bytes by construction, so the size is always non-zero.
/// Centralized to avoid `.unwrap()` at each pipeline-creation site.
pub(super) fn globals_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<StrokeGlobals>() as u64)
        .expect("StrokeGlobals has non-zero size by construction")
}

pub(super) fn write_globals(ctx: &RenderCtx<'_>, ubo: &wgpu::Buffer, color: Color) {
    ctx.queue
        .write_buffer(ubo, 0, bytemuck::bytes_of(&StrokeGlobals::new(ctx.viewport, color)));
}

// ── quad vertex (instanced disk rendering) ────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];
