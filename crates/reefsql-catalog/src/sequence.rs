//! Process-wide named sequences

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::RwLock;

use crate::CatalogError;

/// Named monotonic counters producing unique successive integers.
///
/// Counters start at 0; `next` atomically increments and returns the new
/// value, so the first call yields 1. The increment is a single atomic
/// step independent of any table lock: two concurrent callers never
/// observe the same value. Sequences are never dropped during normal
/// operation.
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    counters: RwLock<HashMap<String, AtomicI64>>,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        SequenceGenerator { counters: RwLock::new(HashMap::new()) }
    }

    /// Register a new sequence.
    pub fn create(&self, name: &str) -> Result<(), CatalogError> {
        let mut counters = self.counters.write();
        if counters.contains_key(name) {
            return Err(CatalogError::SequenceAlreadyExists(name.to_string()));
        }
        counters.insert(name.to_string(), AtomicI64::new(0));
        Ok(())
    }

    /// Atomically advance the named sequence and return its new value.
    pub fn next(&self, name: &str) -> Result<i64, CatalogError> {
        let counters = self.counters.read();
        let counter = counters
            .get(name)
            .ok_or_else(|| CatalogError::SequenceNotFound(name.to_string()))?;
        Ok(counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Check if a sequence exists
    pub fn exists(&self, name: &str) -> bool {
        self.counters.read().contains_key(name)
    }
}
