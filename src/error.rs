//! Error types for template rendering.
//!
//! Uses thiserror for derive macros. Every variant names the offending key or
//! index so a failure is diagnosable without re-deriving it from the bag.

use thiserror::Error;

/// Validation failure raised while normalizing an attribute bag.
///
/// All variants are immediate, non-retryable, caller-visible failures. There
/// is no recovery path inside the engine: any error aborts the entire render
/// and no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An attribute key is not a pure unsigned decimal digit string.
    ///
    /// This covers non-digit characters, a leading sign, blank keys, and any
    /// whitespace (keys are never trimmed).
    #[error("attribute key '{key}' is not an unsigned decimal index")]
    InvalidKey {
        /// The offending key, verbatim.
        key: String,
    },

    /// Two attribute keys normalize to the same canonical index.
    ///
    /// Arises across different string forms of the same number, e.g. `"0"`
    /// and `"00"` both present in one bag.
    #[error("attribute keys '{}' and '{}' both normalize to index {index}", .keys.0, .keys.1)]
    DuplicateKey {
        /// The canonical index both keys parse to.
        index: usize,
        /// The colliding keys, in lexicographic order.
        keys: (String, String),
    },

    /// The set of canonical indices has a gap below the maximum observed
    /// index (e.g. keys for 0 and 2 but none for 1).
    #[error("no attribute key normalizes to index {index}")]
    MissingIndex {
        /// The smallest missing index.
        index: usize,
    },
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_display() {
        let err = ValidationError::InvalidKey {
            key: " 1 ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "attribute key ' 1 ' is not an unsigned decimal index"
        );
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = ValidationError::DuplicateKey {
            index: 0,
            keys: ("0".to_string(), "00".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "attribute keys '0' and '00' both normalize to index 0"
        );
    }

    #[test]
    fn test_missing_index_display() {
        let err = ValidationError::MissingIndex { index: 1 };
        assert_eq!(err.to_string(), "no attribute key normalizes to index 1");
    }

    #[test]
    fn test_implements_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ValidationError::MissingIndex { index: 0 });
    }
}
