//! Attribute value types for rummage
//!
//! This module defines:
//! - FieldValue: unified enum for entity attribute values
//!
//! Predicates never inspect entities directly; they compare `FieldValue`s
//! handed out by the [`Record`](crate::traits::Record) trait. Text matching
//! operates on the canonical text rendering (the `Display` form), so numeric
//! and date attributes can still satisfy substring and equality matches.
//! Ordered comparison is only defined between compatible kinds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// An entity attribute value that a predicate can match against
///
/// ## Comparison rules
///
/// - `Text` compares lexicographically with `Text`
/// - `Int` and `Decimal` compare numerically, coercing `Int` to `f64`
///   when the kinds are mixed
/// - `Date` compares chronologically with `Date`
/// - Every other kind pairing has no ordering and never satisfies a
///   range predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// UTF-8 text
    Text(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Decimal(f64),
    /// Calendar date (no time component)
    Date(NaiveDate),
}

impl FieldValue {
    /// Get the kind name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "Text",
            FieldValue::Int(_) => "Int",
            FieldValue::Decimal(_) => "Decimal",
            FieldValue::Date(_) => "Date",
        }
    }

    /// Check if this is a text value
    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }

    /// Check if this is an integer value
    pub fn is_int(&self) -> bool {
        matches!(self, FieldValue::Int(_))
    }

    /// Check if this is a decimal value
    pub fn is_decimal(&self) -> bool {
        matches!(self, FieldValue::Decimal(_))
    }

    /// Check if this is a date value
    pub fn is_date(&self) -> bool {
        matches!(self, FieldValue::Date(_))
    }

    /// Ordered comparison between compatible kinds
    ///
    /// Returns `None` for incompatible kind pairings (e.g. `Text` vs `Date`)
    /// and for NaN decimals, so range predicates simply fail to match rather
    /// than erroring.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(b)),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.partial_cmp(b),
            (FieldValue::Int(a), FieldValue::Decimal(b)) => (*a as f64).partial_cmp(b),
            (FieldValue::Decimal(a), FieldValue::Int(b)) => a.partial_cmp(&(*b as f64)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Canonical text rendering used by `Partial` and `Full` matching
///
/// Dates render as ISO 8601 (`YYYY-MM-DD`).
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Decimal(d) => write!(f, "{}", d),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<f64> for FieldValue {
    fn from(d: f64) -> Self {
        FieldValue::Decimal(d)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_type_name() {
        assert_eq!(FieldValue::Text("x".into()).type_name(), "Text");
        assert_eq!(FieldValue::Int(1).type_name(), "Int");
        assert_eq!(FieldValue::Decimal(1.5).type_name(), "Decimal");
        assert_eq!(FieldValue::Date(date(2021, 5, 1)).type_name(), "Date");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(FieldValue::Text("x".into()).is_text());
        assert!(FieldValue::Int(1).is_int());
        assert!(FieldValue::Decimal(1.0).is_decimal());
        assert!(FieldValue::Date(date(2021, 5, 1)).is_date());
        assert!(!FieldValue::Int(1).is_text());
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(FieldValue::Text("Carl".into()).to_string(), "Carl");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Decimal(10.5).to_string(), "10.5");
        assert_eq!(FieldValue::Date(date(2021, 5, 1)).to_string(), "2021-05-01");
    }

    #[test]
    fn test_compare_text_lexicographic() {
        let a = FieldValue::Text("apple".into());
        let b = FieldValue::Text("banana".into());
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert_eq!(b.compare(&a), Some(Ordering::Greater));
        assert_eq!(a.compare(&a), Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_numeric_coercion() {
        let int = FieldValue::Int(10);
        let dec = FieldValue::Decimal(9.5);
        assert_eq!(int.compare(&dec), Some(Ordering::Greater));
        assert_eq!(dec.compare(&int), Some(Ordering::Less));
        assert_eq!(FieldValue::Int(2).compare(&FieldValue::Decimal(2.0)), Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_dates() {
        let earlier = FieldValue::Date(date(2021, 1, 1));
        let later = FieldValue::Date(date(2021, 12, 31));
        assert_eq!(earlier.compare(&later), Some(Ordering::Less));
    }

    #[test]
    fn test_compare_incompatible_kinds() {
        let text = FieldValue::Text("2021-01-01".into());
        let d = FieldValue::Date(date(2021, 1, 1));
        assert_eq!(text.compare(&d), None);
        assert_eq!(d.compare(&text), None);
        assert_eq!(FieldValue::Int(1).compare(&text), None);
    }

    #[test]
    fn test_compare_nan_has_no_ordering() {
        let nan = FieldValue::Decimal(f64::NAN);
        assert_eq!(nan.compare(&FieldValue::Decimal(1.0)), None);
        assert_eq!(FieldValue::Int(1).compare(&nan), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(FieldValue::from("hi"), FieldValue::Text("hi".into()));
        assert_eq!(FieldValue::from(7i64), FieldValue::Int(7));
        assert_eq!(FieldValue::from(7.5), FieldValue::Decimal(7.5));
        assert_eq!(FieldValue::from(date(2020, 2, 29)), FieldValue::Date(date(2020, 2, 29)));
    }

    proptest! {
        /// Int/Decimal coercion is antisymmetric: swapping operands flips the ordering.
        #[test]
        fn prop_numeric_compare_antisymmetric(a in -1_000_000i64..1_000_000, b in -1e6f64..1e6) {
            let int = FieldValue::Int(a);
            let dec = FieldValue::Decimal(b);
            let forward = int.compare(&dec);
            let backward = dec.compare(&int);
            prop_assert_eq!(forward.map(Ordering::reverse), backward);
        }
    }
}
