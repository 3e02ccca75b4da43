mod animator;
mod app;
mod lissajous;
mod painter;

use anyhow::Result;
use pacer_engine::device::SwapchainConfig;
use pacer_engine::host::{Host, HostConfig};
use pacer_engine::logging::{init_logging, LoggingConfig};
use pacer_engine::surface::PacingConfig;
use winit::dpi::LogicalSize;

use crate::app::DemoApp;

fn main() -> Result<()> {
    // PACER_LOG takes precedence over RUST_LOG for the demo.
    let logging = std::env::var("PACER_LOG")
        .map(LoggingConfig::with_filter)
        .unwrap_or_default();
    init_logging(logging);

    log::info!("pacer demo: [L] toggle 30 fps limit, [Space] pause, [Esc] quit");

    // Uncapped presentation makes the host tick far faster than the limiter.
    let config = HostConfig {
        title: "pacer: 2D drawing demo".to_string(),
        initial_size: LogicalSize::new(640.0, 640.0),
        swapchain: SwapchainConfig::uncapped(),
    };

    let app = DemoApp::new(PacingConfig::default())?;
    Host::run(config, app)
}
