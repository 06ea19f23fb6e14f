//! # brunoc-core — Bruno Collection Model
//!
//! Typed in-memory representation of a Bruno collection export: the tree of
//! folders and HTTP/GraphQL requests, their auth and body variants, and the
//! collection's environments. Also owns the JSON codec that maps the tree to
//! and from Bruno's export format.
//!
//! ## Key Design Principles
//!
//! 1. **Plain values.** Every entity is a `serde` struct with public fields
//!    and no behavior beyond builders and lookups. Validation lives in
//!    `brunoc-schema`.
//!
//! 2. **Lenient wire fields.** Selector fields (`type`, `mode`, `method`,
//!    `grantType`) are stored as strings so that decoding never fails on an
//!    unexpected literal. The typed enums in [`literal`] give a checked view.
//!
//! 3. **Tri-state optionals.** `Option` fields are omitted from the wire
//!    when `None`, so absent, empty and populated values stay distinct
//!    through `decode(encode(x))`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `brunoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod auth;
pub mod body;
pub mod codec;
pub mod collection;
pub mod error;
pub mod identity;
pub mod item;
pub mod literal;
pub mod request;

// Re-export primary types for ergonomic imports.
pub use auth::{Auth, AwsV4Auth, BasicAuth, BearerAuth, DigestAuth, OAuth2};
pub use body::{Body, GraphqlBody, MultipartFormEntry};
pub use codec::{decode, encode, encode_pretty};
pub use collection::{
    add_item, create_document, Collection, Environment, EnvironmentVariable, OpaqueMap,
    COLLECTION_VERSION,
};
pub use error::{CodecError, ModelError};
pub use identity::{Uid, UID_LENGTH};
pub use item::Item;
pub use literal::{
    AuthMode, BodyMode, GrantType, HttpMethod, ItemType, MultipartType, ParamType,
    VariableType,
};
pub use request::{create_request, KeyValue, Request, RequestParam, RequestVars, Script, Var};
