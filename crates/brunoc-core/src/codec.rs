//! # JSON Codec
//!
//! Maps a [`Collection`] to and from Bruno's JSON export format.
//!
//! Decoding is lenient by contract: unknown keys are ignored, missing or
//! `null` required fields take their zero value and missing optionals stay
//! `None`.
//! Only input that is not UTF-8 JSON, or that puts a value of the wrong JSON
//! type in a known field, fails to decode. Everything else is left for
//! validation to report.
//!
//! ## Round-trip law
//!
//! For every `doc` returned by [`decode`], `decode(encode(doc)) == doc`.

use serde::{Deserialize, Deserializer};
use tracing::{debug, trace};

use crate::collection::Collection;
use crate::error::CodecError;

/// Deserialize a collection from UTF-8 JSON bytes.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if the bytes are not a JSON document of
/// the expected shape.
pub fn decode(bytes: &[u8]) -> Result<Collection, CodecError> {
    let doc: Collection = serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, len = bytes.len(), "collection decode failed");
        CodecError::Malformed(e)
    })?;
    trace!(
        len = bytes.len(),
        items = doc.items.len(),
        environments = doc.environments.len(),
        "decoded collection"
    );
    Ok(doc)
}

/// Read a required field, treating an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serialize a collection to compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails, which the entity
/// model does not produce in practice.
pub fn encode(doc: &Collection) -> Result<Vec<u8>, CodecError> {
    let bytes = serde_json::to_vec(doc).map_err(CodecError::Encode)?;
    trace!(len = bytes.len(), "encoded collection");
    Ok(bytes)
}

/// Serialize a collection to indented JSON, for files meant to be read by
/// people and diffed.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encode_pretty(doc: &Collection) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec_pretty(doc).map_err(CodecError::Encode)
}
