//! Query parsing for the rummage search engine
//!
//! This crate turns a user-typed query string into a predicate expression:
//! - tokenizer: whitespace split with quoted-phrase joining
//! - parser: term classification and connector extraction
//! - builder: per-term field predicates and left-to-right composition
//! - rewrite: string-level transforms used by the relevance ranker
//!
//! The pipeline is pure and synchronous; every stage fails before any
//! store call is made.
//!
//! # Grammar
//!
//! ```text
//! query         := term (connector term)*
//! term          := quoted_phrase | word
//! quoted_phrase := '"' word+ '"' | "'" word+ "'"
//! connector     := /and/i | /or/i      (anything else, or absent => AND)
//! word          := any run of non-whitespace characters
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod parser;
pub mod rewrite;
pub mod tokenizer;

pub use builder::{build_predicate, compose, query_predicate, range, term_predicate};
pub use parser::{parse, parse_terms, ParsedQuery};
pub use rewrite::{conjunctive_form, exact_form};
pub use tokenizer::tokenize;
