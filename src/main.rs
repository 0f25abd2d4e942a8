// tagwalk - Terminal audio tag browser
// Three panels: where you came from, where you are, and the tags of
// whatever file you land on

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use tagwalk::audio::TagReader;
use tagwalk::config::Config;
use tagwalk::engine::NavigationEngine;
use tagwalk::fs::OsFilesystem;
use tagwalk::ui::{theme, TerminalManager};

#[derive(Parser)]
#[command(name = "tagwalk")]
#[command(about = "A three-pane terminal browser for audio file tags")]
struct Args {
    /// Directory to start browsing in (overrides the configured one)
    directory: Option<PathBuf>,

    /// Load settings from this file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() -> Result<WorkerGuard> {
    // The TUI owns stdout, so logs go to files under the config directory
    let log_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tagwalk")
        .join("logs");
    std::fs::create_dir_all(&log_dir)?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(&log_dir, "tagwalk.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Base filter: info level for general logs, debug for tagwalk
    let base_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tagwalk=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(base_filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Keep the guard until main returns so buffered log lines still reach
    // the file on the way out
    let _log_guard = init_logging()?;

    info!("tagwalk starting up");

    // Load config - falls back to defaults if missing
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let start_dir = args
        .directory
        .unwrap_or_else(|| config.start_directory.clone());
    let start_dir = start_dir
        .canonicalize()
        .with_context(|| format!("cannot open start directory {}", start_dir.display()))?;

    let accent = theme::color_from_name(&config.ui.accent_color).unwrap_or_else(|| {
        warn!(name = %config.ui.accent_color, "unknown accent color, using the default");
        theme::accent()
    });

    // Fire up the TUI and let it rip
    let mut terminal = TerminalManager::new()?;
    let area = terminal.size()?;
    let mut engine = NavigationEngine::new(
        area,
        start_dir,
        config.audio_extensions,
        accent,
        OsFilesystem,
        TagReader,
    )?;

    let result = engine.run(&mut terminal);
    if let Err(ref err) = result {
        error!("browser loop failed: {err:#}");
    }

    info!("tagwalk exiting");
    result
}
