//! Predicate building and composition
//!
//! Builds one OR-combined predicate per term across the caller's field
//! set, then chains the per-term predicates left to right with the parsed
//! connector sequence. There is no operator-precedence grouping: AND and
//! OR apply strictly in term order, so `a or b and c` evaluates as
//! `(a or b) and c`. This is a compatibility invariant.

use crate::parser::{parse, ParsedQuery};
use rummage_core::{Connector, Error, FieldSet, FieldValue, MatchKind, MatchOp, Predicate, Result, Term};

/// Predicate matching one term against any field in the set
///
/// Fuzzy terms use a case-insensitive substring comparison, exact terms a
/// case-sensitive full equality. Fields are OR-combined with each other,
/// independent of the connectors between terms. `None` when the field set
/// is empty.
pub fn term_predicate(term: &Term, fields: &FieldSet) -> Option<Predicate> {
    let op = match term.kind {
        MatchKind::Exact => MatchOp::Full,
        MatchKind::Fuzzy => MatchOp::Partial,
    };
    Predicate::any_of(
        fields
            .iter()
            .map(|field| Predicate::compare(field, op, term.text.clone())),
    )
}

/// Chain per-term predicates left to right with the connector sequence
///
/// The first predicate seeds an accumulator; each subsequent predicate is
/// ANDed or ORed on per the connector between it and its predecessor.
/// Missing connector entries default to AND. `None` when there are no
/// predicates to chain.
pub fn compose(predicates: Vec<Predicate>, connectors: &[Connector]) -> Option<Predicate> {
    let mut iter = predicates.into_iter();
    let first = iter.next()?;

    let mut connectors = connectors.iter();
    Some(iter.fold(first, |acc, next| {
        match connectors.next().copied().unwrap_or_default() {
            Connector::And => acc.and(next),
            Connector::Or => acc.or(next),
        }
    }))
}

/// Compound predicate for a classified query over a field set
///
/// # Errors
///
/// [`Error::NoSearchTerms`] when nothing is left to match, which includes
/// an empty field set.
pub fn build_predicate(parsed: &ParsedQuery, fields: &FieldSet) -> Result<Predicate> {
    let per_term: Vec<Predicate> = parsed
        .terms
        .iter()
        .filter_map(|term| term_predicate(term, fields))
        .collect();
    compose(per_term, &parsed.connectors).ok_or(Error::NoSearchTerms)
}

/// Full pipeline: query string to compound predicate
///
/// # Errors
///
/// Any tokenizer or classifier error; no store is involved.
pub fn query_predicate(query: &str, fields: &FieldSet) -> Result<Predicate> {
    build_predicate(&parse(query)?, fields)
}

/// Range predicate over one attribute with optional inclusive bounds
///
/// Pure boolean expression with no term or connector involvement; callers
/// AND the result onto a tokenized predicate. `None` when both bounds are
/// absent (no constraint).
pub fn range(
    field: &str,
    lower: Option<FieldValue>,
    upper: Option<FieldValue>,
) -> Option<Predicate> {
    let lower = lower.map(|value| Predicate::at_least(field, value));
    let upper = upper.map(|value| Predicate::at_most(field, value));
    match (lower, upper) {
        (Some(lo), Some(hi)) => Some(lo.and(hi)),
        (Some(lo), None) => Some(lo),
        (None, Some(hi)) => Some(hi),
        (None, None) => None,
    }
}
