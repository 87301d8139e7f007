use crate::core::parser::parse_size;
use crate::error::Result;

/// Checks that a size string would parse, without keeping the byte count.
///
/// Useful when validating config values or CLI flags that are stored as the
/// raw string.
pub fn validate_size(input: &str) -> Result<()> {
    parse_size(input).map(|_| ())
}
