//! Comparison implementations for SqlValue

use crate::SqlValue;
use std::cmp::Ordering;

/// PartialOrd implementation for SQL value comparison
///
/// Implements SQL comparison semantics:
/// - NULL comparisons return None (SQL UNKNOWN)
/// - Type mismatches return None (incomparable)
/// - NaN in floating point returns None (IEEE 754 semantics)
/// - All other comparisons follow Rust's natural ordering
impl PartialOrd for SqlValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use SqlValue::*;
        match (self, other) {
            // NULL comparisons return None (SQL UNKNOWN semantics)
            (Null, _) | (_, Null) => None,

            (Integer(a), Integer(b)) => a.partial_cmp(b),

            // Floating point (handles NaN properly via IEEE 754)
            (Real(a), Real(b)) => a.partial_cmp(b),

            // Lexicographic comparison
            (Text(a), Text(b)) => a.partial_cmp(b),

            // Boolean (false < true)
            (Boolean(a), Boolean(b)) => a.partial_cmp(b),

            (Date(a), Date(b)) => a.partial_cmp(b),

            // Type mismatch - incomparable
            _ => None,
        }
    }
}

impl SqlValue {
    /// Total ordering for deterministic sorts (result presentation, tests).
    ///
    /// NULL sorts before all other values, NaN after all other reals, and
    /// mismatched types fall back to a type-tag ordering. This differs from
    /// SQL comparison semantics, which are three-valued; predicates must go
    /// through `partial_cmp`.
    pub fn total_cmp(&self, other: &SqlValue) -> Ordering {
        use SqlValue::*;

        match (self, other) {
            (Null, Null) => return Ordering::Equal,
            (Null, _) => return Ordering::Less,
            (_, Null) => return Ordering::Greater,
            _ => {}
        }

        if let Some(ordering) = self.partial_cmp(other) {
            return ordering;
        }

        match (self, other) {
            // NaN is greater than all other reals
            (Real(a), Real(b)) => {
                if a.is_nan() && b.is_nan() {
                    Ordering::Equal
                } else if a.is_nan() {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            _ => {
                fn type_tag(val: &SqlValue) -> u8 {
                    match val {
                        Null => 0,
                        Integer(_) => 1,
                        Real(_) => 2,
                        Text(_) => 3,
                        Date(_) => 4,
                        Boolean(_) => 5,
                    }
                }
                type_tag(self).cmp(&type_tag(other))
            }
        }
    }
}
