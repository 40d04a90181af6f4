//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so the
//! demos share one configuration surface.

mod init;

pub use init::{LoggingConfig, init_logging};
