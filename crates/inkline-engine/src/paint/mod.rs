//! Color handling for stroke and clear operations.

mod color;

pub use color::Color;
