use clap::Parser;
use filesize::cli::{Cli, Commands};
use filesize::commands::completion::cmd_generate_completion;
use filesize::commands::format::cmd_format;
use filesize::commands::parse::cmd_parse;
use filesize::commands::validate::cmd_validate;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Parse { sizes, json } => {
            debug!(count = sizes.len(), "parsing sizes");
            cmd_parse(&sizes, json, &mut stdout)?;
        }
        Commands::Format { bytes, unit } => {
            debug!(count = bytes.len(), ?unit, "formatting byte counts");
            cmd_format(&bytes, unit, &mut stdout)?;
        }
        Commands::Validate { sizes } => {
            cmd_validate(&sizes, &mut stdout)?;
        }
        Commands::Completion { shell } => {
            cmd_generate_completion(shell.as_deref(), &mut stdout)?;
        }
    }

    Ok(())
}
