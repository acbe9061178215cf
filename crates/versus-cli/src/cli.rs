//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Versus CLI - Build and inspect data-driven comparison pages.
#[derive(Debug, Parser)]
#[command(name = "versus")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (keys/slugs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate and render the whole catalog to HTML
    Build(BuildArgs),

    /// Validate the catalog and print the report
    Check(CheckArgs),

    /// Compute and print one page's comparison scoreboard
    Score(ScoreArgs),

    /// List the pages in the catalog
    List(ListArgs),
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Content directory (overrides the active profile)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Output directory (overrides the active profile)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Content directory (overrides the active profile)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Permit holes in comparison rows instead of reporting them
    #[arg(long)]
    pub permissive: bool,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Slug of the page to score
    pub page: String,

    /// Content directory (overrides the active profile)
    #[arg(short, long)]
    pub content: Option<PathBuf>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Content directory (overrides the active profile)
    #[arg(short, long)]
    pub content: Option<PathBuf>,
}
