//! Core traits for store abstraction
//!
//! This module defines the Record and StoreAdapter traits that isolate the
//! query parser and composer from any particular persistence technology.
//! Any relational, document, or in-memory store with per-attribute
//! comparisons and boolean AND/OR/NOT composition can satisfy the contract,
//! either with predicate pushdown or a linear-scan fallback.

use crate::error::Result;
use crate::options::QueryOptions;
use crate::predicate::Predicate;
use crate::value::FieldValue;

/// An entity that predicates can be evaluated against
///
/// Implementations expose a stable numeric identity plus attribute values
/// by name. Identity is used for result deduplication and for breaking
/// ordering ties; it must not change for the lifetime of the entity.
pub trait Record {
    /// Stable identity for deduplication and id-order tie-breaks
    fn id(&self) -> u64;

    /// Look up an attribute value by name
    ///
    /// Returns `None` when the entity has no value for the attribute;
    /// predicates treat that as a non-match, not an error.
    fn attribute(&self, field: &str) -> Option<FieldValue>;
}

/// The external collaborator that evaluates predicates against a collection
///
/// Thread safety: adapters must be `Send + Sync` so a ranked search can be
/// shared across threads; the engine itself issues evaluate calls
/// sequentially (at most three per ranked search, one per filtered search).
///
/// # Errors
///
/// Evaluation failures (connectivity, malformed field name, type mismatch)
/// surface as [`Error::Store`](crate::Error::Store) and are propagated to
/// the caller unchanged; the engine performs no retry or fallback.
pub trait StoreAdapter<T: Record>: Send + Sync {
    /// Evaluate a predicate, returning matching entities in the order
    /// requested by `options` (id-ascending tie-breaks included)
    fn evaluate(&self, predicate: &Predicate, options: &QueryOptions) -> Result<Vec<T>>;
}
