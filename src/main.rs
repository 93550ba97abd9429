//! Entry point for the navigation runtime.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Resolve the page manifest once and build the page state from it.
//! - Replay the event script and write projections to stdout.

mod runtime;
mod script;

use crate::runtime::Runtime;
use crate::script::load_script;
use anyhow::{Result, anyhow};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use thrive_core::app::App;
use thrive_core::config::load_config;
use thrive_core::page::load_page;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let (page_path, script_path) = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        page = %page_path.display(),
        level = %config.log_level,
        threshold = config.scroll_threshold_px,
        "Starting navigation runtime"
    );

    let page = load_page(&page_path)?;
    let messages = match &script_path {
        Some(path) => load_script(path)?,
        None => Vec::new(),
    };

    let app = App::bootstrap(page, config);
    let stdout = io::stdout();
    let mut runtime = Runtime::new(app, stdout.lock());
    runtime.run(messages)
}

fn parse_args() -> Result<(PathBuf, Option<PathBuf>)> {
    let mut args = env::args().skip(1);
    let page = args
        .next()
        .ok_or_else(|| anyhow!("Usage: thrive-nav <page.toml> [events.toml]"))?;

    let page = PathBuf::from(page);
    if !page.exists() {
        return Err(anyhow!("File not found: {}", page.display()));
    }
    let script = args.next().map(PathBuf::from);
    if let Some(path) = &script {
        if !path.exists() {
            return Err(anyhow!("File not found: {}", path.display()));
        }
    }
    Ok((page, script))
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
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
