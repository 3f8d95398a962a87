//! Core types for the rummage search engine
//!
//! This crate provides:
//! - FieldValue: unified attribute value type matched by predicates
//! - Term, MatchKind, Connector: the parsed shape of a search query
//! - FieldSet: the ordered attribute names a term is matched against
//! - Predicate: composable boolean expression tree over entity attributes
//! - Record and StoreAdapter traits for pluggable backing stores
//! - QueryOptions, SortOrder, PageRequest: query-time options
//! - Error taxonomy shared by all rummage crates
//!
//! Everything here is transient, created per search invocation and
//! discarded once results are returned; nothing is persisted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fields;
pub mod options;
pub mod predicate;
pub mod term;
pub mod traits;
pub mod value;

// Re-export commonly used types
pub use error::{Error, Result};
pub use fields::FieldSet;
pub use options::{PageRequest, QueryOptions, SortDirection, SortOrder, DEFAULT_PAGE_SIZE};
pub use predicate::{MatchOp, Predicate};
pub use term::{Connector, MatchKind, Term};
pub use traits::{Record, StoreAdapter};
pub use value::FieldValue;
