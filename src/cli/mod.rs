//! CLI interface for cfgstore

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cfgstore")]
#[command(author = "Krakaw")]
#[command(version = "0.1.0")]
#[command(about = "Manage named JSON config files", long_about = None)]
pub struct Cli {
    /// Directory holding the `config/` folder (defaults to the working directory)
    #[arg(long, global = true, env = "CFGSTORE_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config directory
    Init,

    /// Create a config file, seeded from its bundled default
    Create {
        /// Config name (file is config/<name>.json)
        name: String,

        /// Leave a new file empty instead of seeding it
        #[arg(long)]
        no_default: bool,
    },

    /// Print a config document
    Show {
        name: String,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Print one value; keys starting with '/' are JSON pointers
    Get { name: String, key: String },

    /// Set a top-level key; the value is parsed as JSON, else stored as a string
    Set {
        name: String,
        key: String,
        value: String,
    },

    /// Remove a top-level key
    Unset { name: String, key: String },

    /// List config files
    List,

    /// List bundled defaults
    Defaults,

    /// Recreate a config file from its bundled default
    Reset {
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the path of a config file
    Path { name: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
    Yaml,
}
