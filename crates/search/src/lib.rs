//! Search orchestration for rummage
//!
//! This crate provides:
//! - ranked_search: three-tier relevance ordering with deduplication
//! - filtered_search: a single predicate evaluation for plain filtering
//! - paginate / page_slice: page normalization and slicing
//!
//! Parsing and composition stay in `rummage-query`; this crate only
//! decides which predicates to evaluate, in what order, and how to fold
//! the results into one list.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod paginate;
pub mod ranker;

pub use paginate::{page_slice, paginate};
pub use ranker::{filtered_search, ranked_search, RelevanceTier};
