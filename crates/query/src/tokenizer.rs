//! Raw query tokenization
//!
//! Splits a search string on whitespace and joins quoted phrases back into
//! single tokens. Quote characters are retained in the output; stripping
//! them is the parser's job. Connector words are still plain tokens here.

use rummage_core::{Error, Result};
use tracing::warn;

/// Split a search string into raw term tokens
///
/// A token opening with `"` or `'` greedily consumes the following words
/// (re-joined with single spaces) until one ends with the same quote
/// character; the opening word may close the phrase itself. Tokens are
/// returned in their left-to-right order of appearance and none are
/// dropped at this stage.
///
/// # Errors
///
/// - [`Error::EmptyQuery`] when the string is blank or whitespace-only
/// - [`Error::UnterminatedQuote`] when an opening quote is never closed
pub fn tokenize(query: &str) -> Result<Vec<String>> {
    if query.trim().is_empty() {
        warn!("rejected blank search query");
        return Err(Error::EmptyQuery);
    }

    let words: Vec<&str> = query.split_whitespace().collect();
    let mut tokens = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = phrase_end(&words, start)?;
        tokens.push(words[start..=end].join(" "));
        start = end + 1;
    }
    Ok(tokens)
}

/// Index of the last word belonging to the token starting at `start`
fn phrase_end(words: &[&str], start: usize) -> Result<usize> {
    let quote = match words[start].chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => return Ok(start),
    };

    for (offset, word) in words[start..].iter().enumerate() {
        if word.ends_with(quote) {
            return Ok(start + offset);
        }
    }

    warn!(%quote, "search query contains an opening quote with no closing quote");
    Err(Error::UnterminatedQuote { quote })
}
