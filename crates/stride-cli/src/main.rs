//! Stride CLI Application
//!
//! Command-line interface and MCP server for the stride training planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, ShowArgs};
use log::info;
use mcp::{run_stdio_server, StrideMcpServer};
use renderer::TerminalRenderer;
use stride_core::SessionBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        plans_dir,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_database_path(database_file)
        .with_plans_dir(plans_dir)
        .build()
        .await
        .context("Failed to initialize session")?;

    info!("Stride started");

    match command.unwrap_or(Commands::Show(ShowArgs::default())) {
        Commands::Serve => {
            info!("Starting Stride MCP server");
            let server = StrideMcpServer::new(session)
                .await
                .context("Failed to restore saved state")?;
            run_stdio_server(server).await.context("MCP server failed")
        }
        command => {
            let renderer = TerminalRenderer::new(!no_color);
            Cli::new(session, renderer)
                .await?
                .handle_command(command)
                .await
        }
    }
}
