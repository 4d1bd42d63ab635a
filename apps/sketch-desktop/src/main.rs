mod app;
mod panel;

use anyhow::Result;
use clap::Parser;
use sketch_kernel::{SceneConfig, ScenePreset};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::dpi::LogicalSize;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "sketch-desktop", about = "Rotating shader cube with orbit controls")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene config file (YAML); overrides --preset
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in scene variant: wide, narrow or crisp
    #[arg(short, long, default_value = "wide")]
    preset: ScenePreset,

    /// Window width in logical pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Start with playback stopped
    #[arg(long)]
    paused: bool,
}

impl Cli {
    fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::preset(self.preset),
        };
        if self.paused {
            config.start_playing = false;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    tracing::info!("sketch-desktop starting");

    let config = cli.scene_config()?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = app::GpuApp::new(config, LogicalSize::new(cli.width, cli.height));
    event_loop.run_app(&mut app)?;

    app.into_result()
}
