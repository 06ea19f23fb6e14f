//! # brunoc-cli — Command Line for Bruno Collections
//!
//! Provides the `brunoc` binary.
//!
//! ## Subcommands
//!
//! - `brunoc validate`: Decode and validate one or more collection exports.
//! - `brunoc fmt`: Re-encode an export in canonical key order.
//! - `brunoc new`: Write a fresh collection, optionally with one request.
//!
//! ```bash
//! brunoc validate collection.json --strict-variants
//! brunoc fmt collection.json --pretty --output collection.json
//! brunoc new demo --url http://example.com --output demo.json
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` validation failure, `2` I/O or malformed input.

pub mod fmt;
pub mod new;
pub mod validate;

use anyhow::{Context, Result};
use clap::Args;

use brunoc_schema::ValidatorConfig;

/// Exit code for a clean run.
pub const EXIT_OK: u8 = 0;
/// Exit code when a collection breaks one or more rules.
pub const EXIT_INVALID: u8 = 1;
/// Exit code for unreadable, unwritable or malformed input.
pub const EXIT_ERROR: u8 = 2;

/// Validator switches shared by the subcommands that validate.
///
/// Each flag is OR-ed with its environment variable
/// (`BRUNOC_STRICT_VARIANTS`, `BRUNOC_CHECK_UIDS`).
#[derive(Args, Debug, Clone, Default)]
pub struct ValidatorFlags {
    /// Flag auth/body payloads that do not match the selected mode.
    #[arg(long)]
    pub strict_variants: bool,

    /// Check every uid for the 21-character alphanumeric format.
    #[arg(long)]
    pub check_uids: bool,
}

impl ValidatorFlags {
    /// Merge the flags over the environment configuration.
    pub fn resolve(&self) -> Result<ValidatorConfig> {
        let env = ValidatorConfig::from_env().context("invalid validator configuration")?;
        Ok(self.merge(env))
    }

    fn merge(&self, env: ValidatorConfig) -> ValidatorConfig {
        ValidatorConfig {
            strict_variants: self.strict_variants || env.strict_variants,
            check_uids: self.check_uids || env.check_uids,
        }
    }
}
