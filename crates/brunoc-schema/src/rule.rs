//! # Rules
//!
//! The predicates a registered field can be checked against. A rule sees
//! the field's observed value and, for the conditional kinds, the value of
//! one sibling selector field.
//!
//! Rules other than the requirement kinds pass when the field is absent:
//! an optional field is only checked when it is there.

use std::fmt;

use brunoc_core::identity::is_uid_shaped;

/// A field value as seen by a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed<'a> {
    /// The field is missing (`None`).
    Absent,
    /// A string value, possibly empty.
    Text(&'a str),
    Int(i64),
    Bool(bool),
    /// A structured value (object or list) is present.
    Present,
}

impl<'a> Observed<'a> {
    pub fn text(value: &'a str) -> Self {
        Self::Text(value)
    }

    pub fn opt_text(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map_or(Self::Absent, Self::Int)
    }

    pub fn opt_bool(value: Option<bool>) -> Self {
        value.map_or(Self::Absent, Self::Bool)
    }

    pub fn presence<T>(value: Option<&T>) -> Self {
        if value.is_some() {
            Self::Present
        } else {
            Self::Absent
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Owned rendering for a violation report.
    pub fn to_offending(self) -> Offending {
        match self {
            Self::Absent => Offending::Absent,
            Self::Text(s) => Offending::Value(format!("{s:?}")),
            Self::Int(n) => Offending::Value(n.to_string()),
            Self::Bool(b) => Offending::Value(b.to_string()),
            Self::Present => Offending::Value("<present>".to_string()),
        }
    }
}

/// The offending value recorded in a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offending {
    Absent,
    /// Display form of the value; strings are quoted.
    Value(String),
}

impl fmt::Display for Offending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("absent"),
            Self::Value(v) => f.write_str(v),
        }
    }
}

/// A validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, and non-empty when a string.
    Required,
    /// One of a fixed set of literals.
    OneOf(&'static [&'static str]),
    /// Exactly 21 ASCII alphanumeric characters.
    UidFormat,
    /// An integer no smaller than the bound.
    Min(i64),
    /// Present whenever the sibling field holds one of `values`.
    RequiredIf {
        sibling: &'static str,
        values: &'static [&'static str],
    },
    /// Absent unless the sibling field holds one of `values`.
    ExcludedUnless {
        sibling: &'static str,
        values: &'static [&'static str],
    },
}

impl Rule {
    /// Short identifier of the rule kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::OneOf(_) => "oneof",
            Self::UidFormat => "uid",
            Self::Min(_) => "min",
            Self::RequiredIf { .. } => "required_if",
            Self::ExcludedUnless { .. } => "excluded_unless",
        }
    }

    /// Evaluate the rule. `sibling` is the selector value for the
    /// conditional kinds and ignored otherwise.
    pub fn check(&self, value: Observed<'_>, sibling: Option<&str>) -> bool {
        match *self {
            Self::Required => match value {
                Observed::Absent => false,
                Observed::Text(s) => !s.is_empty(),
                _ => true,
            },
            Self::OneOf(allowed) => match value {
                Observed::Text(s) => allowed.contains(&s),
                _ => true,
            },
            Self::UidFormat => match value {
                Observed::Text(s) => is_uid_shaped(s),
                _ => true,
            },
            Self::Min(bound) => match value {
                Observed::Int(n) => n >= bound,
                _ => true,
            },
            Self::RequiredIf { values, .. } => {
                let triggered = sibling.is_some_and(|s| values.contains(&s));
                !triggered || !value.is_absent()
            }
            Self::ExcludedUnless { values, .. } => {
                let allowed = sibling.is_some_and(|s| values.contains(&s));
                allowed || value.is_absent()
            }
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::OneOf(allowed) => write!(f, "oneof={}", allowed.join(" ")),
            Self::UidFormat => f.write_str("uid(len=21,alphanum)"),
            Self::Min(bound) => write!(f, "min={bound}"),
            Self::RequiredIf { sibling, values } => {
                write!(f, "required_if={sibling} {}", values.join("|"))
            }
            Self::ExcludedUnless { sibling, values } => {
                write!(f, "excluded_unless={sibling} {}", values.join("|"))
            }
        }
    }
}
