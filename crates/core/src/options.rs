//! Query-time options
//!
//! This module defines:
//! - SortDirection and SortOrder: how store results are ordered
//! - QueryOptions: per-evaluation options handed to a StoreAdapter
//! - PageRequest: page number/size with default normalization
//!
//! There is no external configuration surface; defaults are named
//! constants and everything else is set through builder-style methods.

use serde::{Deserialize, Serialize};

/// Results per page when the caller supplies none (or an invalid size)
pub const DEFAULT_PAGE_SIZE: usize = 15;

// ============================================================================
// Sorting
// ============================================================================

/// Direction of a sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    /// Smallest value first (default)
    #[default]
    Ascending,
    /// Largest value first
    Descending,
}

impl SortDirection {
    /// Direction from a reverse flag: `true` means descending
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

/// Order results by an attribute, with id-ascending tie-breaks
///
/// Adapters fall back to id order for unknown attribute names and for
/// entities whose values cannot be compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    /// Attribute name to order by
    pub key: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortOrder {
    /// Ascending order by the given attribute
    pub fn by(key: impl Into<String>) -> Self {
        SortOrder {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Builder: set the direction
    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Builder: flip to descending order
    pub fn descending(self) -> Self {
        self.with_direction(SortDirection::Descending)
    }
}

// ============================================================================
// QueryOptions
// ============================================================================

/// Options for a single store evaluation
///
/// The default (`sort: None`) orders results by ascending entity id, which
/// is what the relevance ranker relies on for stable tie-breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryOptions {
    /// Attribute sort order; `None` means ascending id order
    pub sort: Option<SortOrder>,
}

impl QueryOptions {
    /// Options with ascending id order
    pub fn new() -> Self {
        QueryOptions::default()
    }

    /// Builder: order by an attribute
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }
}

// ============================================================================
// PageRequest
// ============================================================================

/// A requested page of results
///
/// Both fields accept whatever the caller received from its own outer
/// layer; normalization never fails:
/// - page defaults to 1 when absent or below 1
/// - size defaults to [`DEFAULT_PAGE_SIZE`] when absent or below 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageRequest {
    /// Requested page number, 1-based
    pub page: Option<i32>,
    /// Requested results per page
    pub size: Option<i32>,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page: Option<i32>, size: Option<i32>) -> Self {
        PageRequest { page, size }
    }

    /// Requested page normalized to a valid 1-based page number
    pub fn normalized_page(&self) -> usize {
        match self.page {
            Some(page) if page >= 1 => page as usize,
            _ => 1,
        }
    }

    /// Requested size normalized to a valid results-per-page count
    pub fn normalized_size(&self) -> usize {
        match self.size {
            Some(size) if size >= 1 => size as usize,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
