//! Term classification
//!
//! Walks the raw token list produced by the tokenizer, turning quoted
//! tokens into exact terms, bare words into fuzzy terms, and connector
//! words into entries of the connector sequence. Each connector slot is
//! filled from the token following a term, so two adjacent terms default
//! their slot to AND.

use crate::tokenizer::tokenize;
use rummage_core::term::is_connector_word;
use rummage_core::{Connector, Error, Result, Term};
use tracing::warn;

/// A classified query: terms plus the connectors between them
///
/// Invariant: `connectors.len() == terms.len() - 1`. Trailing connector
/// words (a query ending in `and`/`or`) are discarded to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Search terms in order of appearance
    pub terms: Vec<Term>,
    /// Connector between each pair of consecutive terms
    pub connectors: Vec<Connector>,
}

/// Tokenize and classify a query string in one step
///
/// # Errors
///
/// Any tokenizer error, plus [`Error::NoSearchTerms`] when the query
/// consists solely of connector words.
pub fn parse(query: &str) -> Result<ParsedQuery> {
    parse_terms(&tokenize(query)?)
}

/// Classify raw tokens into terms and connectors
///
/// A token starting with a quote character (and longer than a lone quote)
/// becomes an exact term with its first and last characters stripped; the
/// quote-check runs before the connector check, so `"or"` is an exact term,
/// not a connector. Everything else that is not a connector word becomes a
/// fuzzy term.
///
/// # Errors
///
/// [`Error::NoSearchTerms`] when no terms remain after connector removal.
pub fn parse_terms(tokens: &[String]) -> Result<ParsedQuery> {
    let mut terms = Vec::new();
    let mut connectors = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let term = match classify(token) {
            Some(term) => term,
            None => continue,
        };
        terms.push(term);
        if let Some(next) = tokens.get(i + 1) {
            connectors.push(Connector::from_token(next));
        }
    }

    if terms.is_empty() {
        warn!("query contains no search terms after connector removal");
        return Err(Error::NoSearchTerms);
    }
    connectors.truncate(terms.len() - 1);

    Ok(ParsedQuery { terms, connectors })
}

/// Classify one token; `None` for connector words
fn classify(token: &str) -> Option<Term> {
    if (token.starts_with('"') || token.starts_with('\'')) && token.chars().count() > 1 {
        // Strip the surrounding quote characters.
        let mut inner = token[1..].to_string();
        inner.pop();
        return Some(Term::exact(inner));
    }
    if is_connector_word(token) {
        return None;
    }
    Some(Term::fuzzy(token))
}
