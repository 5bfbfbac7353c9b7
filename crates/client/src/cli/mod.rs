//! CLI command definitions.

pub mod entries;
pub mod health;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::{BASE_URL_VAR, DEFAULT_BASE_URL};

/// CLI client for the ratings API.
#[derive(Debug, Parser)]
#[command(name = "ratings-client")]
#[command(about = "CLI client for the ratings API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = BASE_URL_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Entry management.
    Entries(entries::EntriesCommand),
    /// Server health checks.
    Health(health::HealthCommand),
}
