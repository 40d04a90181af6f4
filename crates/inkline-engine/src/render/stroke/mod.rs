//! Stroke rasterization strategies.
//!
//! Three interchangeable ways to put a polyline on screen:
//! - [`MeshStrokeRenderer`] — CPU miter tessellation, triangle-list upload
//! - [`DiskStrokeRenderer`] — instanced circle stamps
//! - [`LineStripRenderer`] — storage-buffer line strip, no widening
//!
//! Each renderer owns its GPU resources (pipeline keyed on the surface
//! format, capacity-doubling dynamic buffers) and consumes the point
//! sequence every frame.

mod common;
mod disks;
mod mesh;
mod strip;

pub use disks::DiskStrokeRenderer;
pub use mesh::MeshStrokeRenderer;
pub use strip::{LineStripRenderer, StripSupportError, preflight_line_strip};

use inkline_geom::Vec2;

use super::{RenderCtx, RenderTarget};

/// Common seam over the stroke strategies.
pub trait StrokeRenderer {
    /// Draws `points` as a stroked polyline.
    ///
    /// `width` is the full stroke width in logical pixels; strategies that
    /// cannot honor it (the line-strip passthrough) ignore it.
    fn draw(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        points: &[Vec2],
        width: f32,
    );
}
