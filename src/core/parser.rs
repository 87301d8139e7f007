use crate::core::unit::Unit;
use crate::error::{Result, SizeError};
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

// The optional '-' is only accepted so negative input can be reported as such.
// Separator whitespace is ASCII only.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?[0-9]+(?:\.[0-9]+)?)[\t\n\f\r ]*([a-zA-Z]*)$")
        .expect("size pattern must compile")
});

/// 2^63, the first float that no longer fits an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

enum Magnitude {
    Whole(i64),
    Fractional(f64),
}

/// A number and its unit, alive only for the duration of one parse.
struct Quantity {
    magnitude: Magnitude,
    unit: Unit,
}

impl Quantity {
    fn bytes(&self, input: &str) -> Result<i64> {
        let multiplier = self.unit.multiplier();
        match self.magnitude {
            Magnitude::Whole(n) => n
                .checked_mul(multiplier)
                .ok_or_else(|| SizeError::Overflow(input.to_string())),
            Magnitude::Fractional(x) => truncate_bytes(x * multiplier as f64, input),
        }
    }
}

/// Converts a fractional byte count to whole bytes, truncating toward zero.
pub(crate) fn truncate_bytes(value: f64, input: &str) -> Result<i64> {
    if value.is_nan() {
        return Err(SizeError::InvalidNumber(input.to_string()));
    }
    if value.is_sign_negative() {
        return Err(SizeError::NegativeSize(input.to_string()));
    }
    if value >= I64_LIMIT {
        return Err(SizeError::Overflow(input.to_string()));
    }
    // `as` truncates toward zero
    Ok(value as i64)
}

/// Converts a human-readable size string to a byte count.
///
/// Accepted forms:
///   - plain numbers: `"1024"`, `"512"`
///   - binary units: `"4k"`, `"4K"`, `"4KiB"`, `"10m"`, `"10MiB"`
///   - decimal units: `"4KB"`, `"10MB"`
///   - fractions: `"1.5k"`, `"2.5MB"`
///
/// Whitespace around the input and between number and unit is ignored.
/// Fractional byte counts are truncated toward zero.
pub fn parse_size(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SizeError::EmptyInput);
    }

    let captures = SIZE_PATTERN
        .captures(trimmed)
        .ok_or_else(|| SizeError::InvalidFormat(trimmed.to_string()))?;
    let number = &captures[1];
    let unit_str = &captures[2];

    if number.starts_with('-') {
        return Err(SizeError::NegativeSize(number.to_string()));
    }

    let unit = if unit_str.is_empty() {
        Unit::Byte
    } else {
        Unit::from_symbol(unit_str)
            .ok_or_else(|| SizeError::UnknownUnit(unit_str.to_ascii_lowercase()))?
    };

    let quantity = Quantity {
        magnitude: parse_magnitude(number, trimmed)?,
        unit,
    };
    quantity.bytes(trimmed)
}

fn parse_magnitude(number: &str, input: &str) -> Result<Magnitude> {
    if number.contains('.') {
        return number
            .parse::<f64>()
            .map(Magnitude::Fractional)
            .map_err(|_| SizeError::InvalidNumber(number.to_string()));
    }

    match number.parse::<i64>() {
        Ok(n) => Ok(Magnitude::Whole(n)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(SizeError::Overflow(input.to_string()))
        }
        Err(_) => Err(SizeError::InvalidNumber(number.to_string())),
    }
}
