//! GPU line strip demo.
//!
//! The point sequence is pulled from a storage buffer in the vertex stage
//! and re-emitted unchanged, so the stroke stays a thin hairline whatever
//! width is configured. Exists to demonstrate the GPU plumbing, not to look
//! good.
//!
//! Exit codes: 2 when the vertex-storage capability (or any adapter) is
//! missing, 1 when the shader fails validation, 0 otherwise.

use winit::dpi::LogicalSize;

use inkline_demos::{CanvasApp, WINDOW_HEIGHT, WINDOW_WIDTH};
use inkline_engine::device::GpuInit;
use inkline_engine::logging::{LoggingConfig, init_logging};
use inkline_engine::paint::Color;
use inkline_engine::render::stroke::{LineStripRenderer, StripSupportError, preflight_line_strip};
use inkline_engine::window::{Runtime, RuntimeConfig};

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = pollster::block_on(preflight_line_strip()) {
        log::error!("line strip preflight failed: {err}");
        let code = match err {
            StripSupportError::NoAdapter(_) | StripSupportError::VertexStorageUnsupported => 2,
            StripSupportError::ShaderRejected(_) => 1,
        };
        std::process::exit(code);
    }

    let config = RuntimeConfig {
        title: "inkline — gpu line strip".to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
    };

    let gpu_init = GpuInit {
        present_mode: wgpu::PresentMode::Fifo,
        ..GpuInit::default()
    };

    let app = CanvasApp::new(LineStripRenderer::new(Color::from_srgb_u8(220, 40, 40, 255)));

    if let Err(err) = Runtime::run(config, gpu_init, app) {
        log::error!("runtime failed: {err:#}");
        std::process::exit(1);
    }
}
