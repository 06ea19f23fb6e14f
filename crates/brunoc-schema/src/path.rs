//! Field paths locating a value inside a collection tree.
//!
//! Rendered as `items[0].request.headers[2].name`; the root renders as
//! `(root)`.

use std::fmt;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A wire field name.
    Field(&'static str),
    /// A position within a list.
    Index(usize),
}

/// Location of a field, from the collection root down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// A copy of this path extended by one field.
    pub fn field(&self, name: &'static str) -> Self {
        let mut next = self.clone();
        next.segments.push(Segment::Field(name));
        next
    }

    /// The last field name on the path, ignoring trailing indices.
    pub fn leaf_field(&self) -> Option<&'static str> {
        self.segments.iter().rev().find_map(|s| match s {
            Segment::Field(name) => Some(*name),
            Segment::Index(_) => None,
        })
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}
