// crates/qualifier-core/src/store.rs - Quote storage contract
//
// The dispatcher only needs two things from storage: the rendered quotes in
// insertion order, and an add that rejects an exact duplicate of a rendered
// form. `MemoryStore` does both under a single lock so the duplicate check and
// the append cannot interleave with another caller.

use std::sync::Mutex;
use thiserror::Error;

use crate::quote::Quote;

/// Errors reported by a quote store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Quote has already been added previously: {0}")]
    Duplicate(String),

    #[error("Quote store lock was poisoned")]
    Poisoned,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered, duplicate-free collection of rendered quotes
pub trait QuoteStore {
    /// Rendered quotes in insertion order
    fn list(&self) -> StoreResult<Vec<String>>;

    /// Add a quote unless its rendered form is already present
    ///
    /// Returns `StoreError::Duplicate` carrying the rendered form when it is.
    fn add(&self, quote: Quote) -> StoreResult<()>;
}

/// Process-lifetime store backed by a vector
#[derive(Debug, Default)]
pub struct MemoryStore {
    quotes: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored quotes
    pub fn len(&self) -> usize {
        self.quotes.lock().map(|quotes| quotes.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuoteStore for MemoryStore {
    fn list(&self) -> StoreResult<Vec<String>> {
        let quotes = self.quotes.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(quotes.clone())
    }

    fn add(&self, quote: Quote) -> StoreResult<()> {
        let rendered = quote.into_rendered();
        let mut quotes = self.quotes.lock().map_err(|_| StoreError::Poisoned)?;

        if quotes.iter().any(|existing| *existing == rendered) {
            return Err(StoreError::Duplicate(rendered));
        }

        quotes.push(rendered);
        Ok(())
    }
}

impl<S: QuoteStore + ?Sized> QuoteStore for &S {
    fn list(&self) -> StoreResult<Vec<String>> {
        (**self).list()
    }

    fn add(&self, quote: Quote) -> StoreResult<()> {
        (**self).add(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantMode;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let store = MemoryStore::new();
        store.add(Quote::new("first", VariantMode::Normal)).unwrap();
        store.add(Quote::new("second", VariantMode::Normal)).unwrap();
        store.add(Quote::new("yellow", VariantMode::PigLatin)).unwrap();

        assert_eq!(store.list().unwrap(), vec!["first", "second", "Ellowyay"]);
    }

    #[test]
    fn test_duplicate_rendered_form_is_rejected() {
        let store = MemoryStore::new();
        store.add(Quote::new("Hewwo", VariantMode::Normal)).unwrap();

        // Different raw text and mode, same rendered form
        let result = store.add(Quote::new("Hello", VariantMode::Uwu));
        assert_eq!(result, Err(StoreError::Duplicate("Hewwo".to_string())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_concurrent_adds_keep_uniqueness() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.add(Quote::new("same", VariantMode::Normal)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|added| *added)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let borrowed = &store;
        borrowed.add(Quote::new("shared", VariantMode::Normal)).unwrap();
        assert_eq!(store.list().unwrap(), vec!["shared"]);
    }

    proptest! {
        #[test]
        fn prop_each_add_grows_by_at_most_one(texts in proptest::collection::vec("[a-c]{1,2}", 0..20)) {
            let store = MemoryStore::new();
            for text in &texts {
                let before = store.len();
                let _ = store.add(Quote::new(text.as_str(), VariantMode::Normal));
                prop_assert!(store.len() <= before + 1);
            }

            let listed = store.list().unwrap();
            let mut unique = listed.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), listed.len());
        }
    }
}
