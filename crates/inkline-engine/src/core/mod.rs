//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! demo applications, without leaking runtime internals into user code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
