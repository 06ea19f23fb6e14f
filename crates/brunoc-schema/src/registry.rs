//! # Rule Registry
//!
//! Each entity type registers a [`RuleSet`]: a list of field rules
//! (field name, value reader, rules checked in order) and a list of nested
//! entries that hand child values back to the walker. One generic walker
//! evaluates every set, so no entity has hand-written validation code.
//!
//! Rules for a single field run in registration order and stop at the first
//! failure, so `type = ""` reports `required` and not also `oneof`. Distinct
//! fields are always all evaluated.

use crate::config::ValidatorConfig;
use crate::path::{FieldPath, Segment};
use crate::rule::{Observed, Rule};
use crate::violation::Violation;

/// Configuration switch guarding a field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Only when [`ValidatorConfig::check_uids`] is set.
    CheckUids,
    /// Only when [`ValidatorConfig::strict_variants`] is set.
    StrictVariants,
}

impl Gate {
    fn open(self, config: &ValidatorConfig) -> bool {
        match self {
            Self::Always => true,
            Self::CheckUids => config.check_uids,
            Self::StrictVariants => config.strict_variants,
        }
    }
}

type Reader<T> = for<'a> fn(&'a T) -> Observed<'a>;
type SiblingReader<T> = for<'a> fn(&'a T) -> &'a str;
type Nested<T> = Box<dyn Fn(&T, &mut Walk<'_>) + Send + Sync>;

struct FieldRule<T> {
    field: &'static str,
    read: Reader<T>,
    sibling: Option<SiblingReader<T>>,
    rules: Vec<Rule>,
    gate: Gate,
}

/// Declarative rules for one entity type.
pub struct RuleSet<T: 'static> {
    entity: &'static str,
    fields: Vec<FieldRule<T>>,
    nested: Vec<Nested<T>>,
}

impl<T: 'static> RuleSet<T> {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            fields: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Name of the entity type, for diagnostics.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Number of registered field rules, counting each rule separately.
    pub fn rule_count(&self) -> usize {
        self.fields.iter().map(|f| f.rules.len()).sum()
    }

    /// Check `field` against `rules`, in order.
    pub fn field(self, field: &'static str, read: Reader<T>, rules: &[Rule]) -> Self {
        self.push_field(field, read, None, rules, Gate::Always)
    }

    /// Like [`field`](Self::field), but only when `gate` is open.
    pub fn gated(
        self,
        gate: Gate,
        field: &'static str,
        read: Reader<T>,
        rules: &[Rule],
    ) -> Self {
        self.push_field(field, read, None, rules, gate)
    }

    /// Check `field` against a conditional rule that looks at a sibling.
    pub fn conditional(
        self,
        gate: Gate,
        field: &'static str,
        read: Reader<T>,
        sibling: SiblingReader<T>,
        rule: Rule,
    ) -> Self {
        self.push_field(field, read, Some(sibling), &[rule], gate)
    }

    /// Walk into an optional child value.
    pub fn child<C: Schema>(
        mut self,
        field: &'static str,
        get: for<'a> fn(&'a T) -> Option<&'a C>,
    ) -> Self {
        self.nested.push(Box::new(move |value: &T, walk: &mut Walk<'_>| {
            if let Some(child) = get(value) {
                walk.path.push(Segment::Field(field));
                walk.visit(child);
                walk.path.pop();
            }
        }));
        self
    }

    /// Walk into every element of an optional list.
    pub fn each<C: Schema>(
        mut self,
        field: &'static str,
        get: for<'a> fn(&'a T) -> Option<&'a [C]>,
    ) -> Self {
        self.nested.push(Box::new(move |value: &T, walk: &mut Walk<'_>| {
            let Some(children) = get(value) else {
                return;
            };
            walk.path.push(Segment::Field(field));
            for (i, child) in children.iter().enumerate() {
                walk.path.push(Segment::Index(i));
                walk.visit(child);
                walk.path.pop();
            }
            walk.path.pop();
        }));
        self
    }

    fn push_field(
        mut self,
        field: &'static str,
        read: Reader<T>,
        sibling: Option<SiblingReader<T>>,
        rules: &[Rule],
        gate: Gate,
    ) -> Self {
        self.fields.push(FieldRule {
            field,
            read,
            sibling,
            rules: rules.to_vec(),
            gate,
        });
        self
    }

    fn apply(&self, value: &T, walk: &mut Walk<'_>) {
        for entry in &self.fields {
            if !entry.gate.open(walk.config) {
                continue;
            }
            let observed = (entry.read)(value);
            let sibling = entry.sibling.map(|read| read(value));
            if let Some(rule) = entry.rules.iter().find(|r| !r.check(observed, sibling)) {
                walk.violations.push(Violation {
                    path: walk.path.field(entry.field),
                    rule: *rule,
                    value: observed.to_offending(),
                });
            }
        }
        for nested in &self.nested {
            nested(value, walk);
        }
    }
}

/// An entity type with a registered rule set.
pub trait Schema: Sized + 'static {
    fn rule_set(registry: &Registry) -> &RuleSet<Self>;
}

/// Every entity rule set, built once.
pub struct Registry {
    pub(crate) sets: crate::rules::RuleSets,
}

/// Traversal state: current path and the violations found so far.
pub struct Walk<'r> {
    registry: &'r Registry,
    config: &'r ValidatorConfig,
    path: FieldPath,
    violations: Vec<Violation>,
}

impl<'r> Walk<'r> {
    pub(crate) fn new(registry: &'r Registry, config: &'r ValidatorConfig) -> Self {
        Self {
            registry,
            config,
            path: FieldPath::root(),
            violations: Vec::new(),
        }
    }

    /// Apply the rule set of `T` to `value` and everything below it.
    pub fn visit<T: Schema>(&mut self, value: &T) {
        T::rule_set(self.registry).apply(value, self);
    }

    pub(crate) fn finish(self) -> Vec<Violation> {
        self.violations
    }
}
