//! Stroke geometry for mouse-drawn polylines.
//!
//! Pure CPU math with no platform or GPU dependencies:
//! - [`Polyline`]: the append-only point sequence grown while drawing
//! - [`miter`]: miter-joint quad tessellation for thick strokes
//! - [`stamps`]: circle-stamp placement along a stroke
//!
//! Canonical space is logical pixels, origin top-left, +X right, +Y down,
//! matching the engine's renderers.

mod polyline;
mod vec2;

pub mod miter;
pub mod stamps;

pub use polyline::Polyline;
pub use vec2::Vec2;
