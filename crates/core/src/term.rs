//! Parsed query shape
//!
//! This module defines:
//! - Term: a single quoted phrase or bare word extracted from a search string
//! - MatchKind: how a term is matched (exact vs fuzzy)
//! - Connector: the AND/OR relationship between two adjacent terms
//!
//! Terms are immutable once produced by the query parser. Connector words
//! (`and`/`or`, case-insensitive) are never terms; they are consumed into
//! the connector sequence, which runs parallel to the term list with
//! length `terms.len() - 1`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a term is matched against an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Quoted term: case-sensitive full equality
    Exact,
    /// Bare word: case-insensitive substring match
    Fuzzy,
}

/// Boolean connective between two adjacent terms
///
/// The default is `And`: a connector slot only becomes `Or` when the word
/// between two terms is the literal case-insensitive token `or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Connector {
    /// Both sides must match
    #[default]
    And,
    /// Either side may match
    Or,
}

impl Connector {
    /// Classify the word following a term
    ///
    /// Returns `Or` only for the case-insensitive literal `or`; anything
    /// else (including the next term itself) defaults the slot to `And`.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("or") {
            Connector::Or
        } else {
            Connector::And
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::And => write!(f, "AND"),
            Connector::Or => write!(f, "OR"),
        }
    }
}

/// True if the token is a connector word rather than a search term
pub fn is_connector_word(token: &str) -> bool {
    token.eq_ignore_ascii_case("and") || token.eq_ignore_ascii_case("or")
}

/// A single search term with its match kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// The term text, quote characters already stripped for exact terms
    pub text: String,
    /// How the term is matched
    pub kind: MatchKind,
}

impl Term {
    /// Create an exact (quoted) term
    pub fn exact(text: impl Into<String>) -> Self {
        Term {
            text: text.into(),
            kind: MatchKind::Exact,
        }
    }

    /// Create a fuzzy (bare word) term
    pub fn fuzzy(text: impl Into<String>) -> Self {
        Term {
            text: text.into(),
            kind: MatchKind::Fuzzy,
        }
    }

    /// True when this term requires full equality
    pub fn is_exact(&self) -> bool {
        self.kind == MatchKind::Exact
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Exact => write!(f, "\"{}\"", self.text),
            MatchKind::Fuzzy => write!(f, "{}", self.text),
        }
    }
}
