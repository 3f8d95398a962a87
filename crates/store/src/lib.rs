//! In-memory store adapter for rummage
//!
//! A `BTreeMap` keyed by entity id behind a `parking_lot::RwLock`. The
//! map's key order doubles as the default scan order, so unsorted
//! evaluations come back in ascending id order for free.

#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
