use clap::{Parser, Subcommand};

use crate::cli::GenerateArgs;

/// Turn an affiliate offer into a faceless short-form video plan
///
/// Reelplan expands a product, its audience, benefits and pain points into
/// hooks, a timed five-beat script, alternate content angles, a caption with
/// hashtags, checklists and a posting cadence. It runs as a command-line tool
/// or as an MCP (Model Context Protocol) server for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "reelplan")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print JSON instead of Markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Reelplan CLI
///
/// - `generate`: Build a video plan from an offer
/// - `presets`: List the video lengths, platforms and tones
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a faceless video plan
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// List video lengths, platforms and tones
    #[command(alias = "ls")]
    Presets,
    /// Start the MCP server
    Serve,
}
