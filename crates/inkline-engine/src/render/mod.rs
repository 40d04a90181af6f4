//! GPU rendering subsystem.
//!
//! Renderers consume the raw point sequence and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod ctx;
pub mod stroke;

pub use ctx::{RenderCtx, RenderTarget};
