//! Error types for strmetrics
//!
//! The six comparison entry points never fail: absent input is reported through
//! sentinels. Errors only come from decoding raw bytes and validating options.

use thiserror::Error;

/// Errors raised while preparing inputs for comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// Source bytes are not valid in the declared encoding
    #[error("Malformed {encoding} input at byte {position}")]
    Decode {
        encoding: &'static str,
        position: usize,
    },

    /// Encoding label could not be resolved
    #[error("Unknown encoding label: '{0}'")]
    UnknownEncoding(String),

    /// Option value outside its valid domain
    #[error("Invalid option {name} = {value}: {reason}")]
    InvalidOption {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Convenience alias used by the fallible helpers
pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MetricsError::Decode {
            encoding: "UTF-16LE",
            position: 3,
        };
        assert_eq!(err.to_string(), "Malformed UTF-16LE input at byte 3");

        let err = MetricsError::UnknownEncoding("klingon".to_string());
        assert!(err.to_string().contains("klingon"));
    }
}
