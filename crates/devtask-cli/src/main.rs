//! Devtask CLI Application
//!
//! Command-line interface for the Devtask task tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use devtask_core::TaskManagerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        project_root,
        no_color,
        command,
    } = Args::parse();

    let manager = TaskManagerBuilder::new()
        .with_project_root(project_root)
        .build()
        .context("Failed to initialize task manager")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Devtask started");

    Cli::new(manager, renderer).handle_command(command).await
}
