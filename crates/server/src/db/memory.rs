//! In-memory document store double for handler tests.
//!
//! Evaluates the same [`Filter`](campus_market_core::Filter) model as the
//! MongoDB adapter (via [`super::filter_matches`]) so handler tests exercise
//! real filter semantics without a running store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use campus_market_core::Filter;

use super::{DocumentStore, StoreError, filter_matches};

/// In-memory store keyed by collection name.
///
/// Insertion order is preserved per collection, standing in for the store's
/// native order. `failing()` builds a store whose every operation errors, for
/// exercising 500-path handling.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    fail: bool,
}

impl MemoryStore {
    /// An empty, working store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with a connection error.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            fail: true,
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable(
                "store connection refused".to_string(),
            ));
        }
        Ok(())
    }

    /// All documents currently in a collection, for test assertions.
    #[must_use]
    pub fn dump(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, mut document: Document) -> Result<String, StoreError> {
        self.check_available()?;
        let id = ObjectId::new();
        document.insert("_id", id);
        self.collections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id.to_hex())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .dump(collection)
            .into_iter()
            .filter(|document| filter_matches(filter, document))
            .take(limit)
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.check_available()?;
        Ok(self
            .collections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .keys()
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use campus_market_core::Condition;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store
            .insert("product", doc! { "title": "a" })
            .await
            .unwrap();
        let b = store
            .insert("product", doc! { "title": "b" })
            .await
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(store.dump("product").len(), 2);
    }

    #[tokio::test]
    async fn find_applies_filter_and_limit() {
        let store = MemoryStore::new();
        for category in ["Food", "Food", "Notes"] {
            store
                .insert("product", doc! { "category": category })
                .await
                .unwrap();
        }

        let food = Filter::all().and(Condition::eq("category", "Food"));
        assert_eq!(store.find("product", &food, 50).await.unwrap().len(), 2);
        assert_eq!(store.find("product", &food, 1).await.unwrap().len(), 1);
        assert!(
            store
                .find("product", &Filter::all().and(Condition::eq("category", "Merch")), 50)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn failing_store_errors_on_every_operation() {
        let store = MemoryStore::failing();
        assert!(store.insert("product", doc! {}).await.is_err());
        assert!(store.find("product", &Filter::all(), 1).await.is_err());
        assert!(store.collection_names().await.is_err());
        assert!(store.ping().await.is_err());
    }
}
