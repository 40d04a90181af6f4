//! Coordinate types shared across engine renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using a viewport uniform.
//! `Vec2` lives in `inkline-geom` so the geometry core stays dependency-free.

mod viewport;

pub use inkline_geom::Vec2;
pub use viewport::Viewport;
