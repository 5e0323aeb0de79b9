//! Dayflow CLI Application
//!
//! Command-line interface for the Dayflow daily-timeline planner. The binary
//! is the presentation layer: it reads the wall clock once, hands the instant
//! to the core as a plain value, and renders whatever the planner computes.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use dayflow_core::PlannerBuilder;
use jiff::Zoned;
use log::info;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        snapshot_file,
        no_color,
        command,
    } = Args::parse();

    // The clock collaborator: current local wall-clock time, read once.
    let now = Zoned::now().datetime();

    let planner = PlannerBuilder::new()
        .with_snapshot_path(snapshot_file)
        .build(now)
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Dayflow started");

    Cli::new(planner, renderer).handle(command, now)
}
