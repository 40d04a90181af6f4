//! Inkline engine crate.
//!
//! Owns the platform + GPU runtime pieces shared by the stroke demos:
//! window/event loop, device/surface management, input state, frame timing,
//! and the stroke renderers.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
