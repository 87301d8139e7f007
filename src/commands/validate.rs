use crate::core::validator::validate_size;
use std::io::Write;
use tracing::warn;

/// Reports every input, then fails if any of them was invalid.
pub fn cmd_validate(
    sizes: &[String],
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut invalid = 0;
    for input in sizes {
        match validate_size(input) {
            Ok(()) => writeln!(out, "ok      {}", input)?,
            Err(e) => {
                warn!(code = e.error_code(), "invalid size {:?}: {}", input, e);
                writeln!(out, "invalid {}: {}", input, e)?;
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        return Err(format!("{} of {} sizes are invalid", invalid, sizes.len()).into());
    }
    Ok(())
}
