//! Rummage - free-text entity search with three-tier relevance ranking
//!
//! Rummage turns a user-typed query string (words, quoted phrases,
//! `and`/`or` connectors) into a composable predicate expression over an
//! entity's attributes, evaluates it through a pluggable store adapter,
//! and can post-process results into a three-tier relevance ordering with
//! deduplication and pagination.
//!
//! # Quick Start
//!
//! ```
//! use rummage::{
//!     paginate, ranked_search, FieldSet, FieldValue, MemoryStore, Record,
//! };
//!
//! #[derive(Clone)]
//! struct Person {
//!     id: u64,
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! impl Record for Person {
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//!
//!     fn attribute(&self, field: &str) -> Option<FieldValue> {
//!         match field {
//!             "first_name" => Some(FieldValue::Text(self.first_name.clone())),
//!             "last_name" => Some(FieldValue::Text(self.last_name.clone())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! # fn main() -> rummage::Result<()> {
//! let store = MemoryStore::new();
//! store.insert(Person {
//!     id: 1,
//!     first_name: "Donald".into(),
//!     last_name: "Duck".into(),
//! });
//!
//! let fields = FieldSet::new(["first_name", "last_name"]);
//! let ranked = ranked_search("Donald or Duck", &fields, false, &store)?;
//! let page = paginate(&ranked, Some(1), Some(10));
//! assert_eq!(page.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! Parsing and composition live in `rummage-query`, ranking and pagination
//! in `rummage-search`, and the core types and adapter traits in
//! `rummage-core`. `rummage-store` ships a linear-scan in-memory adapter;
//! relational or document backends implement
//! [`StoreAdapter`] with predicate pushdown instead.

// Re-export the public API of the member crates
pub use rummage_core::*;
pub use rummage_query::*;
pub use rummage_search::*;
pub use rummage_store::MemoryStore;
