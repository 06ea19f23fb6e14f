//! # Collection Validation
//!
//! Applies the registered rule sets to a collection tree and collects every
//! violation. Validation never fails and never mutates: the outcome is a
//! [`ValidationResult`], and callers decide whether violations are fatal.
//!
//! ## Thread Safety
//!
//! `Validator` is `Send + Sync` and cheap to copy. The rule registry it reads
//! is built once per process and shared read-only.

use brunoc_core::Collection;
use tracing::debug;

use crate::config::ValidatorConfig;
use crate::registry::{Registry, Walk};
use crate::rules::registry;
use crate::violation::ValidationResult;

/// Validates collections against the rule registry.
#[derive(Clone, Copy)]
pub struct Validator {
    config: ValidatorConfig,
    registry: &'static Registry,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            registry: registry(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Evaluate every rule against every node of the tree.
    pub fn validate(&self, doc: &Collection) -> ValidationResult {
        let mut walk = Walk::new(self.registry, &self.config);
        walk.visit(doc);
        let violations = walk.finish();
        debug!(
            collection = %doc.name,
            violations = violations.len(),
            "validated collection"
        );
        ValidationResult::from_violations(violations)
    }
}

/// Validate with the default (permissive) configuration.
pub fn validate(doc: &Collection) -> ValidationResult {
    Validator::default().validate(doc)
}
