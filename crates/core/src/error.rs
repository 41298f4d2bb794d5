//! Error types for vmwire.
//!
//! One error enum is shared by every crate in the workspace so that failures
//! raised deep inside a converter reach the caller of a serialization pass
//! unchanged.

use thiserror::Error;

/// All vmwire errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A write-only converter was asked to decode a value.
    #[error("unsupported operation: {operation} is not implemented for {type_name}")]
    UnsupportedOperation {
        /// The attempted operation (e.g. "read")
        operation: &'static str,
        /// Type the operation targeted
        type_name: &'static str,
    },

    /// A value's runtime shape contradicts what its type handle declares
    #[error("shape mismatch: {type_name} does not expose {expected}")]
    ShapeMismatch {
        /// Offending type
        type_name: &'static str,
        /// The view the converter required
        expected: &'static str,
    },

    /// Structural encoding reached a value with no structure to encode
    #[error("not serializable: {type_name} has no structural encoding")]
    NotSerializable {
        /// Offending type
        type_name: &'static str,
    },

    /// Decoding a view model from something other than a JSON object
    #[error("expected a JSON object, found {found}")]
    ExpectedObject {
        /// JSON kind that was found instead
        found: &'static str,
    },

    /// Schema declared the same property name twice
    #[error("duplicate property `{name}` in schema for {type_name}")]
    DuplicateProperty {
        /// Property name
        name: String,
        /// View-model type
        type_name: &'static str,
    },

    /// Leaf encode/decode failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for vmwire operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build the error raised by write-only converters on decode.
    pub fn unsupported_read(type_name: &'static str) -> Self {
        Error::UnsupportedOperation {
            operation: "read",
            type_name,
        }
    }

    /// Check if this is an unsupported-operation error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation { .. })
    }

    /// Check if this error comes from a malformed schema or value graph
    /// rather than from the data being encoded.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Error::ShapeMismatch { .. } | Error::DuplicateProperty { .. }
        )
    }
}
