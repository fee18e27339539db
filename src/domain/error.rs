//! Domain error types

use thiserror::Error;

/// Why a byte buffer could not be turned into a `ConfigRecord`.
///
/// Decoding is all-or-nothing: whenever one of these is returned, no record
/// was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before a fixed-width field or a text terminator.
    #[error("buffer truncated while reading {field} at offset {offset}")]
    Truncated { field: &'static str, offset: usize },
}

/// Errors that can occur while editing, loading or saving a configuration
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Usage: {0}")]
    Usage(String),
}

/// Result type alias for configurator operations
pub type ConfiguratorResult<T> = Result<T, ConfiguratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_message_names_field_and_offset() {
        let err = DecodeError::Truncated {
            field: "device name",
            offset: 4,
        };
        assert_eq!(
            err.to_string(),
            "buffer truncated while reading device name at offset 4"
        );
    }

    #[test]
    fn decode_error_converts_into_configurator_error() {
        let err: ConfiguratorError = DecodeError::Truncated {
            field: "language",
            offset: 32,
        }
        .into();
        assert!(matches!(
            err,
            ConfiguratorError::Decode(DecodeError::Truncated { .. })
        ));
        assert!(err.to_string().starts_with("Decode error: "));
    }
}
