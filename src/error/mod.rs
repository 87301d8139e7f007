use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    #[error("empty size string")]
    EmptyInput,

    #[error("invalid size format: {0}")]
    InvalidFormat(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("size cannot be negative: {0}")]
    NegativeSize(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("size too large: {0}")]
    Overflow(String),
}

impl SizeError {
    /// Errors caused by the shape of the input rather than its value.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            SizeError::EmptyInput | SizeError::InvalidFormat(_) | SizeError::InvalidNumber(_)
        )
    }

    pub fn error_code(&self) -> u32 {
        match self {
            SizeError::EmptyInput => 1000,
            SizeError::InvalidFormat(_) => 1001,
            SizeError::InvalidNumber(_) => 1002,
            SizeError::NegativeSize(_) => 2000,
            SizeError::UnknownUnit(_) => 3000,
            SizeError::Overflow(_) => 4000,
        }
    }
}

pub type Result<T> = std::result::Result<T, SizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_input() {
        assert_eq!(SizeError::EmptyInput.to_string(), "empty size string");
        assert_eq!(
            SizeError::UnknownUnit("zib".into()).to_string(),
            "unknown unit: zib"
        );
        assert_eq!(
            SizeError::Overflow("9999PB".into()).to_string(),
            "size too large: 9999PB"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(SizeError::InvalidFormat("abc".into()).is_syntax_error());
        assert!(!SizeError::NegativeSize("-1".into()).is_syntax_error());
        assert_eq!(SizeError::UnknownUnit("x".into()).error_code(), 3000);
    }
}
