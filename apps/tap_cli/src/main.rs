use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use counter_core::CounterEngine;
use feedback::{load_settings_from, AudioCapability, FeedbackDispatcher, Settings, TapCounter, TerminalBell};
use tracing_subscriber::EnvFilter;

mod input;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(name = "tap-counter", about = "Tap towards a goal count from the terminal")]
struct Args {
    /// Goal tap count; defaults to the configured `default_target`.
    #[arg(long)]
    target: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Replay JSON-lines commands instead of reading the keyboard.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print snapshots as JSON.
    #[arg(long)]
    json: bool,
    #[arg(long)]
    no_audio: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let settings = load_settings_from(args.config.as_deref()).context("failed to load settings")?;
    tracing::debug!(?settings, "settings loaded");
    let mut counter = build_counter(&settings, args.no_audio);
    let stdout = io::stdout();

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            session::run_script(&mut counter, BufReader::new(file), stdout.lock(), args.json)
        }
        None => {
            let target = args
                .target
                .clone()
                .unwrap_or_else(|| settings.default_target.to_string());
            session::run_interactive(
                &mut counter,
                &target,
                io::stdin().lock(),
                stdout.lock(),
                args.json,
            )
        }
    }
}

fn build_counter(settings: &Settings, no_audio: bool) -> TapCounter {
    let audio: Option<Arc<dyn AudioCapability>> = if settings.audio_enabled && !no_audio {
        Some(Arc::new(TerminalBell::stderr()))
    } else {
        None
    };
    // Terminals have no vibration motor.
    let dispatcher = FeedbackDispatcher::new(settings.feedback_config()).with_audio(audio);
    TapCounter::new(CounterEngine::with_policy(settings.target_policy()), dispatcher)
}
