use anyhow::Context;
use clap::Parser;
use generator::profile::{build_frame_sequence, GeneratorConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::SessionModel;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::SessionConfig;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the pose-driven repetition tracker")]
struct Args {
    /// Run a single synthetic session and print the workout summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a session config from YAML
    #[arg(long)]
    session: Option<PathBuf>,
    #[arg(long, default_value = "jumping_jacks")]
    exercise: String,
    #[arg(long, default_value_t = 10)]
    reps: u32,
    #[arg(long, default_value_t = 15.0)]
    fps: f64,
    /// Keep the HTTP bridge alive for incoming payloads
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let session_config = if let Some(path) = args.session {
        SessionConfig::load(path)?
    } else {
        SessionConfig::from_args(&args.exercise, args.reps, args.fps)
    };

    let runner = Runner::new(session_config.clone());
    let bridge = GuiBridge::new(Arc::new(runner.clone()));
    let generator_config = GeneratorConfig {
        exercise: session_config.exercise,
        reps: session_config.target_reps,
        fps: session_config.fps,
        ..Default::default()
    };
    let frames = build_frame_sequence(&generator_config)?;

    if args.offline {
        let outcome = runner.execute(&frames)?;

        println!(
            "Offline session -> {} ({} frames)",
            outcome.last_status.status_text, outcome.frames
        );
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome.summary.to_json())?
        );

        bridge.publish(&SessionModel::from_outcome(&outcome))?;
        bridge.publish_status("Offline session summary ready.");

        let report = format!(
            "exercise={} reps={} duration={:.1}s pause={:.1}s stamina={} calories={:.2}\n",
            outcome.summary.exercise,
            outcome.summary.reps,
            outcome.summary.duration_secs,
            outcome.summary.pause_secs,
            outcome.summary.stamina,
            outcome.summary.calories_kcal
        );
        let report_path = PathBuf::from("tools/data/offline_summary.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
