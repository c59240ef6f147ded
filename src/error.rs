//! Error types for card number parsing and intake validation.
//!
//! The checksum core has exactly one failure mode, [`ParseError`]. The intake
//! layer in [`crate::validate`] wraps it in [`ValidationError`] together with
//! the rejections that only make sense once a whole number has been read.

use std::fmt;

/// A character that is not a decimal digit was found where a digit was expected.
///
/// Raised only by the checksum validator. Callers should treat it as a
/// rejection of malformed input, not as a retryable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// Character index (0-based, from the left) of the offending character.
    pub position: usize,
    /// The offending character.
    pub character: char,
}

impl ParseError {
    pub(crate) const fn new(position: usize, character: char) -> Self {
        Self {
            position,
            character,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid digit '{}' at position {}",
            self.character.escape_default(),
            self.position
        )
    }
}

impl std::error::Error for ParseError {}

/// Errors returned when accepting a card number at the intake boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input string was empty.
    Empty,

    /// The input contained only separators.
    NoDigits,

    /// A character other than a digit or separator was found.
    Malformed(ParseError),

    /// The Luhn checksum failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,

    /// More digits than any card number carries.
    TooLong {
        /// The number of digits seen so far.
        length: usize,
        /// The maximum allowed digits (19).
        maximum: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),
            Self::NoDigits => write!(f, "card number contains no digits"),
            Self::Malformed(err) => write!(f, "malformed card number: {}", err),
            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed)")
            }
            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for ValidationError {
    fn from(err: ParseError) -> Self {
        Self::Malformed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::new(2, 'a').to_string(),
            "invalid digit 'a' at position 2"
        );
        assert_eq!(
            ParseError::new(0, '\n').to_string(),
            "invalid digit '\\n' at position 0"
        );
    }

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::Empty.to_string(), "card number is empty");
        assert_eq!(
            ValidationError::Malformed(ParseError::new(5, 'x')).to_string(),
            "malformed card number: invalid digit 'x' at position 5"
        );
        assert_eq!(
            ValidationError::TooLong {
                length: 20,
                maximum: 19
            }
            .to_string(),
            "card number too long: got 20 digits, maximum is 19"
        );
    }

    #[test]
    fn test_source_chain() {
        let err = ValidationError::from(ParseError::new(1, '?'));
        let source = err.source().expect("malformed carries its parse error");
        assert_eq!(source.to_string(), "invalid digit '?' at position 1");
        assert!(ValidationError::InvalidChecksum.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParseError>();
        assert_send_sync::<ValidationError>();
    }
}
