//! Query rewriting for relevance tiers
//!
//! String-level transforms the relevance ranker uses to derive stricter
//! variants of the user's query. Both operate on the raw token list
//! (quotes retained) and re-join with single spaces, so the output is
//! itself a parseable query.

use crate::tokenizer::tokenize;
use rummage_core::term::is_connector_word;
use rummage_core::Result;

/// Rewrite a query so every term requires a full match
///
/// Bare words that are not connectors are wrapped in double quotes;
/// already-quoted tokens and connector words pass through unchanged.
///
/// # Errors
///
/// Any tokenizer error for the input query.
pub fn exact_form(query: &str) -> Result<String> {
    let tokens = tokenize(query)?;
    let rewritten: Vec<String> = tokens
        .into_iter()
        .map(|token| {
            if token.starts_with('"') || token.starts_with('\'') || is_connector_word(&token) {
                token
            } else {
                format!("\"{}\"", token)
            }
        })
        .collect();
    Ok(rewritten.join(" "))
}

/// Rewrite a query so every connector is a conjunction
///
/// Tokens case-insensitively equal to `or` become `and`; everything else
/// passes through. A quoted `'or'` keeps its quotes and is untouched.
///
/// # Errors
///
/// Any tokenizer error for the input query.
pub fn conjunctive_form(query: &str) -> Result<String> {
    let tokens = tokenize(query)?;
    let rewritten: Vec<String> = tokens
        .into_iter()
        .map(|token| {
            if token.eq_ignore_ascii_case("or") {
                "and".to_string()
            } else {
                token
            }
        })
        .collect();
    Ok(rewritten.join(" "))
}
