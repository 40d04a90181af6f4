use bytemuck::{Pod, Zeroable};

use inkline_geom::Vec2;

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::common::{StrokeGlobals, globals_min_binding_size, premul_alpha_blend};
use super::StrokeRenderer;

const SHADER_SRC: &str = include_str!("shaders/strip.wgsl");

/// GPU-expanded line strip renderer.
///
/// Uploads the raw point sequence to a read-only storage buffer and draws a
/// `LineStrip` primitive whose vertex shader pulls `points[vertex_index]`
/// and emits it unchanged. This is plumbing demonstration only: no widening
/// happens on the GPU, so the result is a thin hairline regardless of the
/// requested stroke width.
///
/// Requires vertex-stage storage buffers; run [`preflight_line_strip`]
/// before opening a window to fail fast when the capability is missing.
pub struct LineStripRenderer {
    color: Color,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    globals_ubo: Option<wgpu::Buffer>,

    points_ssbo: Option<wgpu::Buffer>,
    points_capacity: usize,

    scratch: Vec<StripPoint>,
}

impl LineStripRenderer {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            globals_ubo: None,
            points_ssbo: None,
            points_capacity: 0,
            scratch: Vec::new(),
        }
    }
}

impl StrokeRenderer for LineStripRenderer {
    fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        points: &[Vec2],
        _width: f32,
    ) {
        // A strip needs two vertices before anything is visible.
        if points.len() < 2 {
            return;
        }

        self.scratch.clear();
        self.scratch
            .extend(points.iter().map(|p| StripPoint { pos: [p.x, p.y] }));

        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx, self.scratch.len());

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(ubo) = self.globals_ubo.as_ref() else { return };
        let Some(ssbo) = self.points_ssbo.as_ref() else { return };

        ctx.queue.write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&StrokeGlobals::new(ctx.viewport, self.color)),
        );
        ctx.queue
            .write_buffer(ssbo, 0, bytemuck::cast_slice(&self.scratch));

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("inkline line strip pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..self.scratch.len() as u32, 0..1);
    }
}

impl LineStripRenderer {
    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("inkline line strip shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
        });

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("inkline line strip bgl"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(globals_min_binding_size()),
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Storage { read_only: true },
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                ],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("inkline line strip pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("inkline line strip pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.globals_ubo = None;
        self.points_ssbo = None;
        self.points_capacity = 0;
    }

    /// (Re)creates the globals UBO and points SSBO as needed.
    ///
    /// The bind group references the SSBO, so growing the buffer also
    /// invalidates and rebuilds the bind group.
    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>, required_points: usize) {
        if self.globals_ubo.is_none() {
            self.globals_ubo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("inkline line strip globals ubo"),
                size: std::mem::size_of::<StrokeGlobals>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.bind_group = None;
        }

        if required_points > self.points_capacity || self.points_ssbo.is_none() {
            let new_cap = required_points.next_power_of_two().max(256);
            self.points_ssbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("inkline line strip points ssbo"),
                size: (new_cap * std::mem::size_of::<StripPoint>()) as u64,
                usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.points_capacity = new_cap;
            self.bind_group = None;
        }

        if self.bind_group.is_some() {
            return;
        }

        let (Some(bgl), Some(ubo), Some(ssbo)) = (
            self.bind_group_layout.as_ref(),
            self.globals_ubo.as_ref(),
            self.points_ssbo.as_ref(),
        ) else {
            return;
        };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("inkline line strip bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: ssbo.as_entire_binding(),
                },
            ],
        }));
    }
}

// ── preflight ─────────────────────────────────────────────────────────────

/// Why the line strip demo cannot run on this machine.
#[derive(Debug, thiserror::Error)]
pub enum StripSupportError {
    #[error("no usable GPU adapter: {0}")]
    NoAdapter(String),

    #[error("adapter does not support vertex-stage storage buffers")]
    VertexStorageUnsupported,

    #[error("line strip shader rejected: {0}")]
    ShaderRejected(String),
}

/// Checks that the line strip renderer can run, without opening a window.
///
/// Probes a headless adapter for the vertex-storage downlevel capability and
/// validates the strip shader against a headless device. Binaries map
/// [`StripSupportError::VertexStorageUnsupported`] / `NoAdapter` to exit
/// code 2 and [`StripSupportError::ShaderRejected`] to exit code 1.
pub async fn preflight_line_strip() -> Result<(), StripSupportError> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| StripSupportError::NoAdapter(e.to_string()))?;

    let downlevel = adapter.get_downlevel_capabilities();
    if !downlevel.flags.contains(wgpu::DownlevelFlags::VERTEX_STORAGE) {
        return Err(StripSupportError::VertexStorageUnsupported);
    }

    let (device, _queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("inkline strip preflight device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .map_err(|e| StripSupportError::NoAdapter(e.to_string()))?;

    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let _module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("inkline line strip shader (preflight)"),
        source: wgpu::ShaderSource::Wgsl(SHADER_SRC.into()),
    });
    if let Some(err) = error_scope.pop().await {
        return Err(StripSupportError::ShaderRejected(err.to_string()));
    }

    Ok(())
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Tightly packed point for the storage buffer; matches WGSL `array<vec2f>`
/// (8-byte stride).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct StripPoint {
    pos: [f32; 2],
}
