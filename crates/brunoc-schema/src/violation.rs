//! # Violations
//!
//! Structured results of a validation pass. A violation names the field
//! (by path), the rule it failed, and the value that failed it.

use std::fmt;

use serde::Serialize;

use crate::path::FieldPath;
use crate::rule::{Offending, Rule};

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path to the violating field.
    pub path: FieldPath,
    /// The rule that failed.
    pub rule: Rule,
    /// The observed value, or absent.
    pub value: Offending,
}

impl Violation {
    /// Rendered path, e.g. `items[0].request.method`.
    pub fn field(&self) -> String {
        self.path.to_string()
    }

    /// Flattened, serializable form for machine-readable output.
    pub fn report(&self) -> ViolationReport {
        ViolationReport {
            field: self.path.to_string(),
            rule: self.rule.to_string(),
            value: match &self.value {
                Offending::Absent => None,
                Offending::Value(v) => Some(v.clone()),
            },
        }
    }
}

/// JSON shape of a violation: `{"field": ..., "rule": ..., "value": ...}`.
/// `value` is `null` when the field was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationReport {
    pub field: String,
    pub rule: String,
    pub value: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: failed '{}' (value: {})", self.path, self.rule, self.value)
    }
}

/// Non-empty, ordered collection of violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations, in tree order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    /// Violations whose rendered path equals `field`.
    pub fn at<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.path.to_string() == field)
    }

    /// Violations of the given rule kind (see [`Rule::tag`]).
    pub fn with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.rule.tag() == tag)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Outcome of validating a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violations),
}

impl ValidationResult {
    /// `Valid` for an empty list, `Invalid` otherwise.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(Violations { violations })
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// All violations; empty when valid.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(v) => v.violations(),
        }
    }

    /// Convert to a `Result` so callers can treat violations as fatal with `?`.
    pub fn into_result(self) -> Result<(), Violations> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(v) => Err(v),
        }
    }
}
