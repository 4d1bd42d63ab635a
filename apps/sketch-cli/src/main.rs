use anyhow::Context;
use clap::{Parser, Subcommand};
use sketch_controller::{FixedContainer, FrameOutcome, SceneController};
use sketch_kernel::{ManualClock, SceneConfig, ScenePreset};
use sketch_render::DebugTextRenderer;
use sketch_tools::{PanelEdit, ParameterPanel, SceneInspector};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sketch-cli", about = "Headless tools for the cube sketch")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the default scene settings
    Info,
    /// Run the frame loop against a text renderer on a simulated clock
    Simulate {
        /// Number of display refreshes to run
        #[arg(short, long, default_value = "120")]
        frames: u32,
        /// Refresh rate in Hz
        #[arg(long, default_value = "60")]
        fps: f64,
        /// Container width in logical pixels
        #[arg(long, default_value = "800")]
        width: u32,
        /// Container height in logical pixels
        #[arg(long, default_value = "600")]
        height: u32,
        /// Device pixel ratio before capping
        #[arg(long, default_value = "1.0")]
        dpr: f64,
        /// Value for the progress slider
        #[arg(long, default_value = "0.0")]
        progress: f32,
        /// Stop playback after this many frames
        #[arg(long)]
        stop_after: Option<u32>,
        /// Scene config file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print every frame instead of only the last
        #[arg(long)]
        trace: bool,
        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a preset as YAML, or validate a config file
    Config {
        /// Preset to print
        #[arg(short, long, default_value = "wide")]
        preset: ScenePreset,
        /// Config file to validate instead
        #[arg(long)]
        check: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            let config = SceneConfig::default();
            println!("sketch-cli v{}", env!("CARGO_PKG_VERSION"));
            println!(
                "camera: fov={} near={} far={} at ({}, {}, {})",
                config.fov,
                config.near,
                config.far,
                config.camera_position.x,
                config.camera_position.y,
                config.camera_position.z
            );
            println!(
                "cube: size={} uSize={}*ratio, pixel ratio cap {}",
                config.cube_size, config.point_size, config.pixel_ratio_cap
            );
            let panel = ParameterPanel::new();
            let names: Vec<_> = panel.controls().iter().map(|c| c.name()).collect();
            println!("panel: {}", names.join(", "));
        }
        Commands::Simulate {
            frames,
            fps,
            width,
            height,
            dpr,
            progress,
            stop_after,
            config,
            trace,
            json,
        } => {
            let config = match config {
                Some(path) => SceneConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SceneConfig::default(),
            };
            anyhow::ensure!(fps > 0.0, "fps must be positive");
            tracing::info!("simulating {frames} frames at {fps} Hz on {width}x{height}");

            let clock = ManualClock::new();
            let container = FixedContainer::new(width, height, dpr);
            let mut controller = SceneController::with_clock(&container, config, clock.clone())?;
            controller.build_scene();
            ParameterPanel::new().apply(PanelEdit::Progress(progress), &mut controller);

            let mut renderer = DebugTextRenderer::new();
            let mut last = None;
            for frame in 0..frames {
                if stop_after == Some(frame) {
                    controller.stop();
                }
                if let FrameOutcome::Drawn(text) = controller.frame_update(&mut renderer)? {
                    if trace {
                        print!("{text}");
                    }
                    last = Some(text);
                }
                clock.advance(1.0 / fps);
            }

            if let (false, Some(text)) = (trace, last) {
                print!("{text}");
            }
            let summary = SceneInspector::summary(&controller);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
                println!("draw calls: {}", renderer.frames());
            }
        }
        Commands::Config { preset, check } => match check {
            Some(path) => {
                SceneConfig::load(&path).with_context(|| format!("checking {}", path.display()))?;
                println!("{}: OK", path.display());
            }
            None => print!("{}", SceneConfig::preset(preset).to_yaml_string()?),
        },
    }

    Ok(())
}
