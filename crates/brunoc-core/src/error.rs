//! # Error Types
//!
//! Errors raised by the model and codec. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Decode and encode failures are fatal to the call that raised them.
//! Semantic problems in a decoded document are never errors here; they are
//! reported as violations by `brunoc-schema`.

use thiserror::Error;

/// Failure to move a collection across the JSON boundary.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is not syntactically valid JSON, is not UTF-8, or has a
    /// value of the wrong JSON type for a field.
    #[error("malformed collection JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The in-memory tree could not be serialized.
    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),
}

impl CodecError {
    /// Line and column of the decode failure, when the input was malformed.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Malformed(e) => Some((e.line(), e.column())),
            Self::Encode(_) => None,
        }
    }
}

/// Errors from the checked views over wire literals and identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A selector string is not one of the literals its field accepts.
    #[error("unknown {field} {value:?}")]
    UnknownLiteral {
        /// Wire name of the selector (e.g. `"method"`).
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A UID is not 21 ASCII alphanumeric characters.
    #[error("malformed uid {0:?}: expected 21 alphanumeric characters")]
    MalformedUid(String),
}
