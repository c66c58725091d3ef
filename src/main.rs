//! Stranger Chat - a random-chat matchmaking simulator
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use strangerchat_app::config;
use strangerchat_app::{RandomSource, ThreadRandom};
use strangerchat_core::logging;

/// Stranger Chat - meet simulated strangers in your terminal
#[derive(Parser, Debug)]
#[command(name = "strangerchat")]
#[command(about = "A random-chat matchmaking simulator", long_about = None)]
struct Args {
    /// Run in headless mode (stdin commands, NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Path to the settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed the random source for reproducible runs
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    let config_path = args.config.unwrap_or_else(config::default_config_path);

    if args.init_config {
        if config::init_config_file(&config_path)? {
            eprintln!("Wrote default settings to {}", config_path.display());
        } else {
            eprintln!("Settings file already exists: {}", config_path.display());
        }
        return Ok(());
    }

    let settings = config::load_settings(&config_path);

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => Box::new(ThreadRandom::seeded(seed)),
        None => Box::new(ThreadRandom::new()),
    };

    let result = if args.headless {
        stranger_chat::run_headless(settings, rng).await
    } else {
        stranger_chat::run(settings, rng).await
    };

    if result.is_err() {
        if let Ok(log_file) = logging::get_current_log_file() {
            eprintln!("Details were logged to {}", log_file.display());
        }
    }

    result?;
    Ok(())
}
