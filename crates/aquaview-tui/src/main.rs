//! `aquaview` — terminal dashboard for a water-management sensor station.
//!
//! Polls a read-only REST endpoint for readings (water level, temperature,
//! humidity, wind speed) and renders them as a gauge, status cards, and
//! time-series charts. Screen `1` is the live dashboard, screen `2` the
//! historical view with CSV export.
//!
//! Logs are written to a file (default `/tmp/aquaview.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app
//! launch.

mod action;
mod app;
mod component;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use aquaview_core::StationConfig;

use crate::app::App;

/// Terminal dashboard for water-management sensor stations.
#[derive(Parser, Debug)]
#[command(name = "aquaview", version, about)]
struct Cli {
    /// Readings endpoint URL
    #[arg(short, long, env = "AQUAVIEW_URL")]
    url: Option<Url>,

    /// Live-view poll interval in seconds
    #[arg(long, default_value_t = 10)]
    poll_interval: u64,

    /// Log file path (defaults to /tmp/aquaview.log)
    #[arg(long, default_value = "/tmp/aquaview.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "aquaview_tui={log_level},aquaview_core={log_level},aquaview_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("aquaview.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Build the station config from CLI flags over the defaults.
fn build_config(cli: &Cli) -> StationConfig {
    let mut config = StationConfig::default();
    if let Some(url) = &cli.url {
        config.endpoint = url.clone();
    }
    config.poll_interval = Duration::from_secs(cli.poll_interval.max(1));
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = build_config(&cli);
    info!(endpoint = %config.endpoint, "starting aquaview");

    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
