//! # brunoc-schema — Collection Validation
//!
//! Validates a decoded [`brunoc_core::Collection`] against Bruno's export
//! contract and reports every violation at once.
//!
//! ## Rule Registry (`registry`, `rules`)
//!
//! Each entity type registers a declarative [`RuleSet`]: field rules
//! (required, one-of, uid format, minimum, conditional presence) plus the
//! child values to descend into. The registry is built once per process and
//! a single generic walker applies it to the whole tree.
//!
//! ## Validation (`validate`)
//!
//! - [`Validator::validate`] returns a [`ValidationResult`]; it never
//!   short-circuits, never mutates, and is deterministic.
//! - [`parse`] / [`parse_file`] decode and validate in one step and hand the
//!   collection back even when it is invalid.
//! - [`write_file`] encodes without validating.
//!
//! ## Crate Policy
//!
//! - Depends only on `brunoc-core` internally.
//! - Validation is collect-all: a violation on one field never hides a
//!   violation on another.

pub mod config;
pub mod document;
pub mod path;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod validate;
pub mod violation;

pub use config::{ConfigError, ValidatorConfig};
pub use document::{parse, parse_file, write_file, DocumentError};
pub use path::{FieldPath, Segment};
pub use registry::{Gate, Registry, RuleSet, Schema, Walk};
pub use rule::{Observed, Offending, Rule};
pub use rules::registry;
pub use validate::{validate, Validator};
pub use violation::{ValidationResult, Violation, ViolationReport, Violations};
