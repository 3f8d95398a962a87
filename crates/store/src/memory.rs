//! Linear-scan predicate evaluation over an in-memory collection

use parking_lot::RwLock;
use rummage_core::{
    FieldValue, Predicate, QueryOptions, Record, Result, SortDirection, SortOrder, StoreAdapter,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::trace;

/// In-memory entity collection implementing [`StoreAdapter`]
///
/// Inserting an entity with an existing id replaces the previous one.
/// Evaluation never fails; the `Store` error class belongs to adapters
/// with an actual backend to lose.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    records: RwLock<BTreeMap<u64, T>>,
}

impl<T: Record + Clone> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        MemoryStore {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert an entity, replacing any previous entity with the same id
    pub fn insert(&self, record: T) -> Option<T> {
        self.records.write().insert(record.id(), record)
    }

    /// Remove an entity by id
    pub fn remove(&self, id: u64) -> Option<T> {
        self.records.write().remove(&id)
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// True when no entities are stored
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl<T> StoreAdapter<T> for MemoryStore<T>
where
    T: Record + Clone + Send + Sync,
{
    fn evaluate(&self, predicate: &Predicate, options: &QueryOptions) -> Result<Vec<T>> {
        let records = self.records.read();
        trace!(total = records.len(), predicate = %predicate, "scanning memory store");

        let mut matches: Vec<T> = records
            .values()
            .filter(|record| predicate.matches(*record))
            .cloned()
            .collect();

        if let Some(sort) = &options.sort {
            sort_by_attribute(&mut matches, sort);
        }
        Ok(matches)
    }
}

/// Sort by an attribute with ascending-id tie-breaks
///
/// Entities without the attribute, and value pairs with no ordering, keep
/// their relative id order.
fn sort_by_attribute<T: Record>(records: &mut [T], sort: &SortOrder) {
    records.sort_by(|a, b| {
        let by_value = attribute_ordering(a.attribute(&sort.key), b.attribute(&sort.key));
        let by_value = match sort.direction {
            SortDirection::Ascending => by_value,
            SortDirection::Descending => by_value.reverse(),
        };
        by_value.then(a.id().cmp(&b.id()))
    });
}

fn attribute_ordering(a: Option<FieldValue>, b: Option<FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}
