//! Circle-stamped thick polyline demo.
//!
//! Same canvas as the miter demo, but the stroke is approximated with
//! instanced disks — cheaper, and visibly scalloped when the pointer moves
//! fast relative to the stroke radius.

use winit::dpi::LogicalSize;

use inkline_demos::{CanvasApp, WINDOW_HEIGHT, WINDOW_WIDTH};
use inkline_engine::device::GpuInit;
use inkline_engine::logging::{LoggingConfig, init_logging};
use inkline_engine::paint::Color;
use inkline_engine::render::stroke::DiskStrokeRenderer;
use inkline_engine::window::{Runtime, RuntimeConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "inkline — circle stamps".to_string(),
        initial_size: LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
    };

    let gpu_init = GpuInit {
        present_mode: wgpu::PresentMode::Fifo,
        ..GpuInit::default()
    };

    let app = CanvasApp::new(DiskStrokeRenderer::new(Color::from_srgb_u8(220, 40, 40, 255)));

    if let Err(err) = Runtime::run(config, gpu_init, app) {
        log::error!("runtime failed: {err:#}");
        std::process::exit(1);
    }
}
