//! Error types for rummage
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All parse errors are raised before any store call is made, so a malformed
//! query never produces partial side effects.

use thiserror::Error;

/// Result type alias for rummage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for query parsing and store evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Query string is blank or whitespace-only
    #[error("search query cannot be blank")]
    EmptyQuery,

    /// An opening quote has no matching closing quote in the rest of the query
    #[error("search query contains an opening {quote} with no closing {quote}")]
    UnterminatedQuote {
        /// The quote character that was never closed
        quote: char,
    },

    /// Query consists solely of connector words
    #[error("no valid search terms in query")]
    NoSearchTerms,

    /// The backing store failed to evaluate a predicate
    ///
    /// Propagated unchanged to the caller; never retried.
    #[error("store evaluation failed: {0}")]
    Store(String),
}

impl Error {
    /// True for errors detected while parsing the query, before any store call
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Error::Store(_))
    }
}
