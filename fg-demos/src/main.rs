//! # fg-demos
//!
//! Runs the force-generator demo scenes headless.
//!
//! ## Usage
//!
//! ```bash
//! # Default buoyancy scene for 600 frames
//! fg-demos run buoyancy --frames 600
//!
//! # Helium cube under light gravity, reporting every 60 frames
//! fg-demos run lighter-than-air --scene light_gravity --report-every 60
//!
//! # Spring demo with a push on frame 10 and pause on frame 100
//! fg-demos run spring --keys a@10,p@100
//!
//! # List scene files
//! fg-demos list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fg_core::scenes::SceneLoader;
use fg_demos::input::ScheduledKey;
use fg_demos::runner::{self, RunOptions};
use fg_demos::timing::{FixedClock, FrameClock, RealtimeClock};
use fg_demos::{build_demo, DemoKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "fg-demos")]
#[command(about = "Headless particle force-generator demos")]
#[command(version)]
struct Args {
    /// Scene directory
    #[arg(long, global = true, default_value = "scenes")]
    scenes: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one demo
    Run {
        #[arg(value_enum)]
        kind: DemoKind,

        /// Scene file name without extension; defaults are used when omitted
        #[arg(short, long)]
        scene: Option<String>,

        /// Number of frames to run
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// Frame duration in seconds
        #[arg(long, default_value = "0.016")]
        dt: f64,

        /// Key presses as key@frame, e.g. w@10,p@100
        #[arg(short, long, value_delimiter = ',')]
        keys: Vec<ScheduledKey>,

        /// Pace frames in wall-clock time and use measured durations
        #[arg(long)]
        realtime: bool,

        /// Log the readout every N frames
        #[arg(long)]
        report_every: Option<u64>,
    },
    /// List scene files per demo
    List,
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = SceneLoader::new(&args.scenes);

    match args.command {
        Command::Run {
            kind,
            scene,
            frames,
            dt,
            keys,
            realtime,
            report_every,
        } => {
            let mut demo = build_demo(kind, &loader, scene.as_deref()).with_context(|| {
                format!(
                    "failed to build {:?} demo from {}",
                    kind,
                    loader.base_path().display()
                )
            })?;
            info!(title = demo.title(), ?scene, frames, dt, realtime, "starting demo");

            let mut clock: Box<dyn FrameClock> = if realtime {
                Box::new(RealtimeClock::new(dt))
            } else {
                Box::new(FixedClock { dt })
            };
            let options = RunOptions {
                frames,
                keys,
                report_every,
            };
            runner::run(demo.as_mut(), clock.as_mut(), &options);
        }
        Command::List => {
            for kind in DemoKind::ALL {
                let names = loader
                    .list(kind.scene_kind())
                    .with_context(|| format!("failed to list {} scenes", kind.scene_kind()))?;
                println!("{}: {}", kind.scene_kind(), names.join(", "));
            }
        }
    }

    Ok(())
}
