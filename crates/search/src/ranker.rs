//! Three-tier relevance ordering
//!
//! A ranked search evaluates three variants of the user's query in
//! decreasing strictness and folds the results into one list:
//!
//! 1. every term exact, every connector AND (full match on all terms)
//! 2. every term exact, connectors as written (full match on any term)
//! 3. the original query (partial match on any term)
//!
//! Entities are appended the first time they are seen, so the merge both
//! deduplicates and encodes the tier ranking as list order. Each tier is
//! fetched in ascending id order, which fixes tie-breaks within a tier.
//! Only the merge order carries meaning; the three store reads are
//! independent of each other.

use rummage_core::{FieldSet, QueryOptions, Record, Result, StoreAdapter};
use rummage_query::{conjunctive_form, exact_form, query_predicate};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

// ============================================================================
// RelevanceTier
// ============================================================================

/// Decreasing-strictness match levels used to rank results
///
/// Ordered: `FullMatchAllTerms` ranks above `FullMatchAnyTerm`, which
/// ranks above `PartialMatchAnyTerm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelevanceTier {
    /// Some attribute fully matches every term (connectors forced to AND)
    FullMatchAllTerms,
    /// Some attribute fully matches at least one term
    FullMatchAnyTerm,
    /// Some attribute partially matches at least one term
    PartialMatchAnyTerm,
}

impl fmt::Display for RelevanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelevanceTier::FullMatchAllTerms => write!(f, "full-match-all-terms"),
            RelevanceTier::FullMatchAnyTerm => write!(f, "full-match-any-term"),
            RelevanceTier::PartialMatchAnyTerm => write!(f, "partial-match-any-term"),
        }
    }
}

// ============================================================================
// Search entry points
// ============================================================================

/// Evaluate a query once, without relevance ordering
///
/// # Errors
///
/// Parse errors surface before the store is called; store errors propagate
/// unchanged.
pub fn filtered_search<T, S>(
    query: &str,
    fields: &FieldSet,
    options: &QueryOptions,
    store: &S,
) -> Result<Vec<T>>
where
    T: Record,
    S: StoreAdapter<T> + ?Sized,
{
    let predicate = query_predicate(query, fields)?;
    store.evaluate(&predicate, options)
}

/// Search with three-tier relevance ordering and deduplication
///
/// Returns the merged list: tier 1 results first, then unseen tier 2
/// results, then unseen tier 3 results, with ascending-id tie-breaks
/// within each tier. When `reverse` is set the final merged list is
/// reversed as a whole, across all tiers jointly, not within each tier.
///
/// # Errors
///
/// All three tier predicates are built before the first store call, so a
/// malformed query never produces partial evaluation. Store errors
/// propagate unchanged.
pub fn ranked_search<T, S>(
    query: &str,
    fields: &FieldSet,
    reverse: bool,
    store: &S,
) -> Result<Vec<T>>
where
    T: Record,
    S: StoreAdapter<T> + ?Sized,
{
    let full_match_some = exact_form(query)?;
    let full_match_all = conjunctive_form(&full_match_some)?;
    debug!(%full_match_all, %full_match_some, original = %query, "derived relevance tier queries");

    let tiers = [
        (RelevanceTier::FullMatchAllTerms, query_predicate(&full_match_all, fields)?),
        (RelevanceTier::FullMatchAnyTerm, query_predicate(&full_match_some, fields)?),
        (RelevanceTier::PartialMatchAnyTerm, query_predicate(query, fields)?),
    ];

    // Ascending id order makes tie-breaks within a tier deterministic.
    let options = QueryOptions::new();

    let mut merged = Vec::new();
    let mut seen = HashSet::new();
    for (tier, predicate) in &tiers {
        let matches = store.evaluate(predicate, &options)?;
        debug!(tier = %tier, count = matches.len(), "evaluated relevance tier");
        append_unseen(&mut merged, &mut seen, matches);
    }

    if reverse {
        merged.reverse();
    }
    Ok(merged)
}

/// Append entities not seen in an earlier (stricter) tier
fn append_unseen<T: Record>(merged: &mut Vec<T>, seen: &mut HashSet<u64>, batch: Vec<T>) {
    for record in batch {
        if seen.insert(record.id()) {
            merged.push(record);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rummage_core::{Error, FieldValue, Predicate};
    use rummage_store::MemoryStore;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u64,
        first_name: String,
        last_name: String,
    }

    impl Person {
        fn new(id: u64, first: &str, last: &str) -> Self {
            Person {
                id,
                first_name: first.to_string(),
                last_name: last.to_string(),
            }
        }

        fn full_name(&self) -> String {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    impl Record for Person {
        fn id(&self) -> u64 {
            self.id
        }

        fn attribute(&self, field: &str) -> Option<FieldValue> {
            match field {
                "first_name" => Some(FieldValue::Text(self.first_name.clone())),
                "last_name" => Some(FieldValue::Text(self.last_name.clone())),
                _ => None,
            }
        }
    }

    fn name_fields() -> FieldSet {
        FieldSet::new(["first_name", "last_name"])
    }

    fn donald_store() -> MemoryStore<Person> {
        let store = MemoryStore::new();
        store.insert(Person::new(1, "Donald", "Duck"));
        store.insert(Person::new(2, "Donald", "Smith"));
        store.insert(Person::new(3, "Lucy", "McDonald"));
        store
    }

    struct FailingStore;

    impl StoreAdapter<Person> for FailingStore {
        fn evaluate(&self, _: &Predicate, _: &QueryOptions) -> Result<Vec<Person>> {
            Err(Error::Store("connection refused".to_string()))
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RelevanceTier::FullMatchAllTerms < RelevanceTier::FullMatchAnyTerm);
        assert!(RelevanceTier::FullMatchAnyTerm < RelevanceTier::PartialMatchAnyTerm);
    }

    #[test]
    fn test_ranked_search_orders_by_relevance() {
        let store = donald_store();
        let results = ranked_search("Donald or Duck", &name_fields(), false, &store).unwrap();
        let names: Vec<String> = results.iter().map(Person::full_name).collect();
        assert_eq!(names, vec!["Donald Duck", "Donald Smith", "Lucy McDonald"]);
    }

    #[test]
    fn test_ranked_search_deduplicates_across_tiers() {
        let store = donald_store();
        let results = ranked_search("Donald or Duck", &name_fields(), false, &store).unwrap();
        let mut ids: Vec<u64> = results.iter().map(Person::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), results.len());
    }

    #[test]
    fn test_ranked_search_reverses_jointly() {
        let store = donald_store();
        let results = ranked_search("Donald or Duck", &name_fields(), true, &store).unwrap();
        let names: Vec<String> = results.iter().map(Person::full_name).collect();
        assert_eq!(names, vec!["Lucy McDonald", "Donald Smith", "Donald Duck"]);
    }

    #[test]
    fn test_ranked_search_ties_break_by_id_within_tier() {
        let store = MemoryStore::new();
        store.insert(Person::new(9, "Alex", "Reed"));
        store.insert(Person::new(4, "Alex", "Stone"));
        store.insert(Person::new(6, "Alex", "Cole"));
        let results = ranked_search("Alex", &name_fields(), false, &store).unwrap();
        let ids: Vec<u64> = results.iter().map(Person::id).collect();
        assert_eq!(ids, vec![4, 6, 9]);
    }

    #[test]
    fn test_ranked_search_parse_error_before_store() {
        // A failing store is never reached when the query is malformed.
        let result = ranked_search("\"open", &name_fields(), false, &FailingStore);
        assert_eq!(result.unwrap_err(), Error::UnterminatedQuote { quote: '"' });
    }

    #[test]
    fn test_ranked_search_propagates_store_errors() {
        let result = ranked_search("Donald", &name_fields(), false, &FailingStore);
        assert_eq!(result.unwrap_err(), Error::Store("connection refused".to_string()));
    }

    #[test]
    fn test_ranked_search_empty_store() {
        let store: MemoryStore<Person> = MemoryStore::new();
        let results = ranked_search("Donald", &name_fields(), false, &store).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_filtered_search_single_evaluation() {
        let store = donald_store();
        let results =
            filtered_search("donald", &name_fields(), &QueryOptions::new(), &store).unwrap();
        let ids: Vec<u64> = results.iter().map(Person::id).collect();
        // Partial match also catches McDonald; id order.
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filtered_search_no_precedence_composition() {
        let store = MemoryStore::new();
        store.insert(Person::new(1, "alpha", "delta"));   // a only
        store.insert(Person::new(2, "beta", "gamma"));    // b and c
        store.insert(Person::new(3, "alpha", "gamma"));   // a and c
        // alpha or beta and gamma  =>  (alpha OR beta) AND gamma
        let results = filtered_search(
            "alpha or beta and gamma",
            &name_fields(),
            &QueryOptions::new(),
            &store,
        )
        .unwrap();
        let ids: Vec<u64> = results.iter().map(Person::id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
