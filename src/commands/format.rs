use crate::core::unit::Unit;
use crate::utils::{format_size, format_size_as};
use std::io::Write;
use tracing::debug;

pub fn cmd_format(
    bytes: &[i64],
    unit: Option<Unit>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for &count in bytes {
        if count < 0 {
            debug!(count, "negative byte count clamped to zero");
        }
        let rendered = match unit {
            Some(unit) => format_size_as(count, unit),
            None => format_size(count),
        };
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}
