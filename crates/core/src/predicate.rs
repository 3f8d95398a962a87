//! Predicate expression trees
//!
//! This module defines:
//! - MatchOp: the comparison applied at a predicate leaf
//! - Predicate: a composable boolean expression over entity attributes
//!
//! Predicates are tagged data rather than closures so they can be
//! serialized, logged, or compiled to a different backend (SQL, in-memory
//! filter) without re-parsing. Combinators consume and return values; there
//! is no shared mutable builder state between searches.

use crate::traits::Record;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// MatchOp
// ============================================================================

/// Comparison operator applied at a predicate leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOp {
    /// Case-insensitive substring match on the canonical text rendering
    Partial,
    /// Case-sensitive full equality on the canonical text rendering
    Full,
    /// Inclusive lower bound (`actual >= expected`)
    GreaterThan,
    /// Inclusive upper bound (`actual <= expected`)
    LessThan,
}

impl MatchOp {
    /// Apply this operator to an actual attribute value and an expected value
    ///
    /// `GreaterThan`/`LessThan` require the two values to have an ordering
    /// (see [`FieldValue::compare`]); incomparable pairs never match.
    pub fn matches(&self, actual: &FieldValue, expected: &FieldValue) -> bool {
        match self {
            MatchOp::Partial => actual
                .to_string()
                .to_lowercase()
                .contains(&expected.to_string().to_lowercase()),
            MatchOp::Full => actual.to_string() == expected.to_string(),
            MatchOp::GreaterThan => {
                matches!(actual.compare(expected), Some(Ordering::Greater | Ordering::Equal))
            }
            MatchOp::LessThan => {
                matches!(actual.compare(expected), Some(Ordering::Less | Ordering::Equal))
            }
        }
    }
}

impl fmt::Display for MatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOp::Partial => write!(f, "~"),
            MatchOp::Full => write!(f, "="),
            MatchOp::GreaterThan => write!(f, ">="),
            MatchOp::LessThan => write!(f, "<="),
        }
    }
}

// ============================================================================
// Predicate
// ============================================================================

/// A composable boolean condition tree over entity attributes
///
/// Leaves compare a single attribute against an expected value; interior
/// nodes combine sub-expressions with AND, OR, and NOT. Construction is
/// value-oriented: every combinator returns a new tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Compare one attribute against an expected value
    Compare {
        /// Attribute name, resolved through [`Record::attribute`]
        field: String,
        /// Comparison operator
        op: MatchOp,
        /// Expected value
        value: FieldValue,
    },
    /// Both sides must match
    And(Box<Predicate>, Box<Predicate>),
    /// Either side may match
    Or(Box<Predicate>, Box<Predicate>),
    /// Inverts the inner expression
    Not(Box<Predicate>),
}

impl Predicate {
    /// Leaf comparing `field` against `value` with the given operator
    pub fn compare(field: impl Into<String>, op: MatchOp, value: impl Into<FieldValue>) -> Self {
        Predicate::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Case-insensitive substring leaf (fuzzy term match)
    pub fn partial(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Predicate::compare(field, MatchOp::Partial, value)
    }

    /// Case-sensitive full equality leaf (exact term match)
    pub fn full(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Predicate::compare(field, MatchOp::Full, value)
    }

    /// Inclusive lower bound leaf
    pub fn at_least(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Predicate::compare(field, MatchOp::GreaterThan, value)
    }

    /// Inclusive upper bound leaf
    pub fn at_most(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Predicate::compare(field, MatchOp::LessThan, value)
    }

    /// Conjunction of this predicate with another
    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Disjunction of this predicate with another
    pub fn or(self, other: Predicate) -> Self {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// Negation of this predicate
    pub fn not(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// OR-fold of the given predicates, `None` when the input is empty
    pub fn any_of(predicates: impl IntoIterator<Item = Predicate>) -> Option<Self> {
        let mut iter = predicates.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, Predicate::or))
    }

    /// AND-fold of the given predicates, `None` when the input is empty
    pub fn all_of(predicates: impl IntoIterator<Item = Predicate>) -> Option<Self> {
        let mut iter = predicates.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, Predicate::and))
    }

    /// Evaluate this predicate against a record
    ///
    /// Absent attributes never match a `Compare` leaf. This is the
    /// linear-scan fallback; adapters with predicate pushdown compile the
    /// tree to their own query form instead.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Predicate::Compare { field, op, value } => record
                .attribute(field)
                .map_or(false, |actual| op.matches(&actual, value)),
            Predicate::And(left, right) => left.matches(record) && right.matches(record),
            Predicate::Or(left, right) => left.matches(record) || right.matches(record),
            Predicate::Not(inner) => !inner.matches(record),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Compare { field, op, value } => write!(f, "{} {} {}", field, op, value),
            Predicate::And(left, right) => write!(f, "({} AND {})", left, right),
            Predicate::Or(left, right) => write!(f, "({} OR {})", left, right),
            Predicate::Not(inner) => write!(f, "(NOT {})", inner),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
