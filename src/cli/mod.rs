// src/cli/mod.rs
use crate::core::unit::Unit;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "filesize")]
#[command(about = "Parse and format human-readable file sizes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert size strings such as "4k" or "1.5MiB" to bytes
    Parse {
        #[arg(required = true)]
        sizes: Vec<String>,

        #[arg(short, long)]
        json: bool,
    },

    /// Render byte counts in human-readable form
    Format {
        #[arg(required = true, allow_negative_numbers = true)]
        bytes: Vec<i64>,

        /// Fixed unit to render in, e.g. "MiB" or "GB"
        #[arg(short, long, value_parser = parse_unit)]
        unit: Option<Unit>,
    },

    /// Check that size strings are well formed
    Validate {
        #[arg(required = true)]
        sizes: Vec<String>,
    },

    /// Generate shell completion script
    Completion {
        shell: Option<String>,
    },
}

fn parse_unit(s: &str) -> Result<Unit, String> {
    Unit::from_symbol(s).ok_or_else(|| format!("unknown unit: {}", s))
}
