// folio: browse a personal portfolio from the terminal.
// Parses arguments, sets up logging, loads the catalog, and runs the TUI.

mod app;
mod catalog;
mod config;
mod error;
mod pagination;
mod paths;
mod state;
mod ui;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;

/// Terminal portfolio browser.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Local catalog file (.json or .toml).
    #[arg(long, conflicts_with = "remote")]
    catalog: Option<PathBuf>,
    /// URL of a JSON catalog fetched once at startup.
    #[arg(long)]
    remote: Option<String>,
}

/// Route tracing output to the log file; the terminal belongs to the TUI.
fn init_logging() {
    let Some(path) = paths::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = File::create(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(path) = args.catalog {
        config.catalog = Some(path);
    }
    if let Some(url) = args.remote {
        config.catalog = None;
        config.remote_catalog = Some(url);
    }
    config.validate()?;

    let source = config.catalog_source();
    info!(source = %source.describe(), "loading catalog");
    let loaded = catalog::load(&source, config.fetch_timeout()).await?;

    let mut app = App::new(loaded, &config.pagination)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = %e, "terminal error");
    }
    Ok(result?)
}
