//! Entry CLI commands.

use clap::{Parser, Subcommand};

/// Entry management commands.
#[derive(Debug, Parser)]
pub struct EntriesCommand {
    #[command(subcommand)]
    pub action: EntriesAction,
}

/// Available entry actions.
#[derive(Debug, Subcommand)]
pub enum EntriesAction {
    /// List all entries.
    List,
    /// Get an entry by name.
    Get {
        /// Entry name.
        name: String,
    },
    /// Set the rating of an entry, creating it if missing.
    Set {
        /// Entry name.
        name: String,
        /// New rating.
        #[arg(allow_negative_numbers = true)]
        rating: i64,
    },
    /// Create or update an entry through the collection endpoint.
    Create {
        /// Entry name.
        #[arg(long)]
        name: String,
        /// Entry rating.
        #[arg(long, allow_negative_numbers = true)]
        rating: i64,
    },
    /// Delete an entry by name.
    Delete {
        /// Entry name.
        name: String,
    },
}
