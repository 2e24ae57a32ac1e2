//! Error types for marscoord

use std::fmt;

use crate::projection::datum::Datum;

/// Result type for marscoord operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in marscoord operations
///
/// The coordinate transforms themselves never fail. These errors come from the
/// opt-in validation and the datum-level API.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Coordinate component is NaN or infinite
    NonFinite(String),

    /// Datum name could not be parsed
    UnknownDatum(String),

    /// No forward transform exists between the two datums
    UnsupportedTransform { from: Datum, to: Datum },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NonFinite(msg) => write!(f, "Non-finite coordinate: {}", msg),
            Error::UnknownDatum(name) => write!(f, "Unknown datum: {}", name),
            Error::UnsupportedTransform { from, to } => {
                write!(f, "Unsupported transform: {} -> {}", from, to)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownDatum("nad83".to_string());
        assert_eq!(err.to_string(), "Unknown datum: nad83");
    }

    #[test]
    fn test_unsupported_transform_display() {
        let err = Error::UnsupportedTransform {
            from: Datum::Bd09,
            to: Datum::Wgs84,
        };
        assert_eq!(err.to_string(), "Unsupported transform: BD09 -> WGS84");
    }

    #[test]
    fn test_non_finite() {
        let err = Error::NonFinite("lat = NaN".to_string());
        assert!(err.to_string().contains("NaN"));
    }
}
