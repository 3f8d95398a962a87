//! Field sets
//!
//! A [`FieldSet`] is the ordered, caller-supplied list of attribute names a
//! single term is matched against. Matching any field in the set satisfies
//! the term; fields are always OR-combined with each other, independent of
//! the AND/OR connectors between terms.

use serde::{Deserialize, Serialize};

/// Ordered list of attribute names a term may match against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldSet(Vec<String>);

impl FieldSet {
    /// Create a field set from an ordered list of attribute names
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSet(fields.into_iter().map(Into::into).collect())
    }

    /// Iterate the attribute names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of attribute names in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set contains no attribute names
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        FieldSet::new(iter)
    }
}
