//! dayplan - menu-driven day schedule and time operator demo
//!
//! Wires together:
//! - Seed loading (optional TOML with initial events)
//! - Logging
//! - The interactive menu application over stdin/stdout

use anyhow::{Context, Result};
use clap::Parser;
use dayplan_cli::{App, Console, ConsoleError};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// dayplan - day schedule and time operator demo
#[derive(Parser, Debug)]
#[command(name = "dayplan")]
#[command(about = "Menu-driven day schedule and time operator demo", long_about = None)]
struct Args {
    /// Seed file with initial events (TOML)
    #[arg(short, long, env = "DAYPLAN_SEED")]
    config: Option<PathBuf>,

    /// Log level (kept quiet by default so menus stay readable)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "dayplan starting");

    let seed = match &args.config {
        Some(path) => {
            let seed = dayplan_config::load_seed(path)
                .with_context(|| format!("Failed to load seed from {:?}", path))?;
            info!(
                seed_path = %path.display(),
                event_count = seed.events.len(),
                "Seed loaded"
            );
            Some(seed)
        }
        None => None,
    };

    let clear_screen =
        !args.no_clear && seed.as_ref().map(|s| s.demo.clear_screen).unwrap_or(true);

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut app = App::new(Console::new(stdin, stdout), clear_screen);
    if let Some(seed) = seed {
        app.preload(seed);
    }

    match app.run() {
        Err(e)
            if e.downcast_ref::<ConsoleError>()
                .is_some_and(|c| matches!(c, ConsoleError::Closed)) =>
        {
            debug!("Input stream closed; exiting");
            Ok(())
        }
        other => other,
    }
}
