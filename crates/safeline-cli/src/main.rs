//! Safeline CLI Application
//!
//! Command-line interface and MCP server for the safeline approval desk.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SafelineMcpServer};
use renderer::TerminalRenderer;
use safeline_core::{params::ListReceived, DeskBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let desk = DeskBuilder::new()
        .with_database_path(database_file)
        .with_user(user)
        .build()
        .await
        .context("Failed to initialize safeline")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Safeline started as {}", desk.user().username);

    match command {
        Some(Records { command }) => {
            Cli::new(desk, renderer)
                .handle_records_command(command)
                .await
        }
        Some(Approval { command }) => {
            Cli::new(desk, renderer)
                .handle_approval_command(command)
                .await
        }
        Some(Settings { command }) => {
            Cli::new(desk, renderer)
                .handle_settings_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Safeline MCP server");
            run_stdio_server(SafelineMcpServer::new(desk))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(desk, renderer)
                .list_received(&ListReceived::default())
                .await
        }
    }
}
