mod common;

use clap::Parser;
use filesize::cli::{Cli, Commands};
use filesize::commands::format::cmd_format;
use filesize::commands::parse::cmd_parse;
use filesize::commands::validate::cmd_validate;

fn run(args: &[&str]) -> (Result<(), String>, String) {
    common::init_logging();
    let cli = Cli::try_parse_from(args).unwrap();
    let mut out = Vec::new();
    let result = match cli.command {
        Commands::Parse { sizes, json } => cmd_parse(&sizes, json, &mut out),
        Commands::Format { bytes, unit } => cmd_format(&bytes, unit, &mut out),
        Commands::Validate { sizes } => cmd_validate(&sizes, &mut out),
        Commands::Completion { .. } => panic!("not exercised here"),
    };
    (result.map_err(|e| e.to_string()), String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_command() {
    let (result, out) = run(&["filesize", "parse", "4k", " 1 KiB ", "2.5MB"]);
    assert!(result.is_ok());
    assert_eq!(out, "4096\n1024\n2500000\n");
}

#[test]
fn test_format_command() {
    let (result, out) = run(&["filesize", "format", "0", "1024", "10240", "--unit", "KB"]);
    assert!(result.is_ok());
    assert_eq!(out, "0.00 KB\n1.02 KB\n10.2 KB\n");
}

#[test]
fn test_validate_command_fails_on_bad_input() {
    let sizes = common::strings(&["4k", "1ZiB"]);
    let mut args = vec!["filesize", "validate"];
    args.extend(sizes.iter().map(String::as_str));

    let (result, out) = run(&args);
    assert_eq!(result.unwrap_err(), "1 of 2 sizes are invalid");
    assert!(out.contains("invalid 1ZiB: unknown unit: zib"));
}

#[test]
fn test_missing_arguments_rejected() {
    assert!(Cli::try_parse_from(["filesize", "parse"]).is_err());
    assert!(Cli::try_parse_from(["filesize", "format", "abc"]).is_err());
}
