//! Widget Playground - terminal showcase of stock interactive controls
//!
//! Every control value lives in a single observable snapshot owned by the
//! `ShowcaseController`; the TUI renders from the latest snapshot and
//! routes key input back through controller operations.

mod app;
mod config;
mod core;
mod data;
mod frontend;

use anyhow::{Context, Result};
use app::ShowcaseApp;
use clap::Parser as ClapParser;
use crate::core::ShowcaseController;
use frontend::tui::screen;
use frontend::TuiFrontend;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "widget-playground")]
#[command(about = "Terminal showcase of stock interactive widgets", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file path (the TUI owns stdout, so diagnostics go to a file)
    #[arg(long, value_name = "FILE", default_value = "widget-playground.log")]
    log_file: PathBuf,

    /// Event poll timeout in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    tick: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };
    let poll_timeout_ms = cli.tick.unwrap_or(config.ui.poll_timeout_ms);

    run_tui(config, poll_timeout_ms)
}

/// Initialize logging to file (use RUST_LOG to control the level)
fn init_logging(path: &PathBuf) -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    Ok(())
}

fn run_tui(config: config::Config, poll_timeout_ms: u64) -> Result<()> {
    // Composition root: the controller is built here and handed to the app
    // by reference-counted handle, never through ambient state
    let controller = Rc::new(ShowcaseController::new());
    let mut app = ShowcaseApp::new(Rc::clone(&controller), &config);

    let mut tui = TuiFrontend::new()?;
    tui.set_poll_timeout(Duration::from_millis(poll_timeout_ms));

    tracing::info!("Widget playground started");

    while app.is_running() {
        for event in tui.poll_events()? {
            app.handle_event(event);
        }

        if app.take_redraw() {
            let state = controller.state();
            tui.draw(|frame| screen::render(frame, &state, app.ui(), config.ui.status_bar))?;
        }
    }

    tui.cleanup()?;
    tracing::info!("Widget playground exited");
    Ok(())
}
