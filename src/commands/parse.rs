use crate::core::parser::parse_size;
use crate::utils::format_size;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
pub struct ParseOutput<'a> {
    pub input: &'a str,
    pub bytes: i64,
    pub display: String,
}

/// Parses each size and writes one line per value. Stops at the first
/// invalid input.
pub fn cmd_parse(
    sizes: &[String],
    json: bool,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for input in sizes {
        let bytes = parse_size(input).inspect_err(|e| warn!("failed to parse {:?}: {}", input, e))?;
        debug!(input = %input, bytes, "parsed size");

        if json {
            let output = ParseOutput {
                input,
                bytes,
                display: format_size(bytes),
            };
            writeln!(out, "{}", serde_json::to_string(&output)?)?;
        } else {
            writeln!(out, "{}", bytes)?;
        }
    }
    Ok(())
}
