//! Reelplan CLI Application
//!
//! Command-line interface and MCP server for the faceless video planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, ReelplanMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        no_color,
        json,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("Reelplan started");

    match command {
        Some(Generate(args)) => Cli::new(renderer, json).generate(args),
        Some(Presets) | None => Cli::new(renderer, json).presets(),
        Some(Serve) => {
            info!("Starting Reelplan MCP server");
            run_stdio_server(ReelplanMcpServer::new())
                .await
                .context("MCP server failed")
        }
    }
}
