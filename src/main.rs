//! Entry point for the guide reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the guide library via `guide_loader`.
//! - Launch the GUI application with the loaded guides and config.

mod app;
mod config;
mod guide_loader;
mod layout;
mod nav;
mod theme;

use crate::app::run_app;
use crate::config::{load_config, serialize_config};
use crate::guide_loader::load_library;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";
const USAGE: &str = "Usage: guide-nav [--print-default-config] [guides-dir]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run { guides_dir: Option<PathBuf> },
    PrintDefaultConfig,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let guides_dir = match parse_args(env::args().skip(1))? {
        Command::PrintDefaultConfig => {
            print!("{}", serialize_config(&config::AppConfig::default())?);
            return Ok(());
        }
        Command::Run { guides_dir } => guides_dir,
    };

    let config = load_config(Path::new(CONFIG_PATH));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    let guides_dir = guides_dir.unwrap_or_else(|| PathBuf::from(&config.guides_dir));
    info!(
        guides = %guides_dir.display(),
        level = %config.log_level,
        "Starting guide reader"
    );
    info!(
        activation_line_px = config.activation_line_px,
        header_clearance_px = config.header_clearance_px,
        frame_interval_ms = config.frame_interval_ms,
        "Active navigation configuration"
    );

    let library = load_library(&guides_dir);
    run_app(library, config).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut guides_dir = None;
    for arg in args {
        match arg.as_str() {
            "--print-default-config" => return Ok(Command::PrintDefaultConfig),
            "-h" | "--help" => return Err(anyhow!(USAGE)),
            flag if flag.starts_with('-') => {
                return Err(anyhow!("Unknown option '{flag}'\n{USAGE}"));
            }
            _ if guides_dir.is_some() => return Err(anyhow!(USAGE)),
            path => guides_dir = Some(PathBuf::from(path)),
        }
    }

    if let Some(dir) = &guides_dir {
        if !dir.is_dir() {
            return Err(anyhow!("Guide directory not found: {}", dir.display()));
        }
    }
    Ok(Command::Run { guides_dir })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
