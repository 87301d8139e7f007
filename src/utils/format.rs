use crate::core::unit::{KIB, Unit};

/// Formats a byte count with the largest binary unit that keeps the value >= 1.
///
/// Negative counts are clamped to `"0 B"`.
pub fn format_size(bytes: i64) -> String {
    if bytes < 0 {
        return "0 B".to_string();
    }
    if bytes < KIB {
        return format!("{} B", bytes);
    }

    let unit = Unit::BINARY_DESCENDING
        .into_iter()
        .find(|unit| bytes >= unit.multiplier())
        .unwrap_or(Unit::KiB);
    format_size_as(bytes, unit)
}

/// Formats a byte count in a fixed unit, using the same precision rules as
/// [`format_size`].
pub fn format_size_as(bytes: i64, unit: Unit) -> String {
    let bytes = bytes.max(0);
    if unit == Unit::Byte {
        return format!("{} B", bytes);
    }

    let value = bytes as f64 / unit.multiplier() as f64;
    if value >= 100.0 {
        format!("{:.0} {}", value, unit)
    } else if value >= 10.0 {
        format!("{:.1} {}", value, unit)
    } else {
        format!("{:.2} {}", value, unit)
    }
}
