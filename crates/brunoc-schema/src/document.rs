//! # Parse and Write Helpers
//!
//! Convenience wrappers combining the codec with validation, and reading or
//! writing collection files. The collection is returned even when it fails
//! validation, so callers can inspect or repair it.

use std::path::{Path, PathBuf};

use brunoc_core::{decode, encode, encode_pretty, Collection, CodecError};
use thiserror::Error;
use tracing::{debug, info};

use crate::validate::Validator;
use crate::violation::{ValidationResult, Violations};

/// Failure of a parse or write helper.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The bytes could not be decoded, or the tree could not be encoded.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The collection decoded but broke one or more rules.
    #[error("collection failed validation with {} violation(s):\n{violations}", violations.len())]
    Invalid {
        /// Structured list of individual violations.
        violations: Violations,
    },

    /// The file could not be read or written.
    #[error("io error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DocumentError {
    /// True when the input was not decodable JSON.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Codec(CodecError::Malformed(_)))
    }

    /// The violations, when this is a validation failure.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Invalid { violations } => Some(violations),
            _ => None,
        }
    }
}

impl From<ValidationResult> for Result<(), DocumentError> {
    fn from(result: ValidationResult) -> Self {
        result
            .into_result()
            .map_err(|violations| DocumentError::Invalid { violations })
    }
}

impl Validator {
    /// Decode and validate.
    ///
    /// Malformed input yields `Collection::default()` alongside a
    /// [`CodecError::Malformed`]. Otherwise the decoded collection is
    /// returned with the validation outcome.
    pub fn parse(&self, bytes: &[u8]) -> (Collection, Result<(), DocumentError>) {
        match decode(bytes) {
            Ok(doc) => {
                let outcome: Result<(), DocumentError> = self.validate(&doc).into();
                (doc, outcome)
            }
            Err(e) => (Collection::default(), Err(e.into())),
        }
    }

    /// Read a file, then [`parse`](Self::parse) it.
    pub fn parse_file(&self, path: &Path) -> (Collection, Result<(), DocumentError>) {
        match std::fs::read(path) {
            Ok(bytes) => {
                debug!(path = %path.display(), len = bytes.len(), "read collection file");
                self.parse(&bytes)
            }
            Err(source) => (
                Collection::default(),
                Err(DocumentError::Io {
                    path: path.to_path_buf(),
                    source,
                }),
            ),
        }
    }
}

/// [`Validator::parse`] with the default configuration.
pub fn parse(bytes: &[u8]) -> (Collection, Result<(), DocumentError>) {
    Validator::default().parse(bytes)
}

/// [`Validator::parse_file`] with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> (Collection, Result<(), DocumentError>) {
    Validator::default().parse_file(path.as_ref())
}

/// Encode a collection and write it to `path`. No validation is performed.
///
/// # Errors
///
/// Returns `DocumentError::Codec` if encoding fails and `DocumentError::Io`
/// if the file cannot be written.
pub fn write_file(
    path: impl AsRef<Path>,
    doc: &Collection,
    pretty: bool,
) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let bytes = if pretty { encode_pretty(doc)? } else { encode(doc)? };
    std::fs::write(path, &bytes).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), len = bytes.len(), "wrote collection");
    Ok(())
}
