//! Document store access.
//!
//! # Collections
//!
//! - `product` - Marketplace listings
//! - `order` - Checkout orders
//! - `user` - Reserved for future authentication work
//!
//! Handlers never talk to the driver directly. They go through the
//! [`DocumentStore`] trait, which is injected via application state so tests
//! can substitute the in-memory double in [`memory`]. The production
//! implementation lives in [`mongo`].

pub mod mongo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use mongodb::bson::{self, Document};
use serde::Serialize;
use thiserror::Error;

use campus_market_core::{Condition, Entity, Filter};

/// Errors from the document store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying driver reported a failure.
    #[error("{0}")]
    Driver(#[from] mongodb::error::Error),

    /// An entity could not be serialized into a store document.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] bson::ser::Error),

    /// The store is unreachable or rejected the operation.
    #[error("{0}")]
    Unavailable(String),
}

/// Generic create/query operations against a collection-oriented store.
///
/// All methods are fallible with [`StoreError`]. An empty result set from
/// [`find`](Self::find) is `Ok(vec![])`, not an error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into the named collection and return the
    /// store-assigned identifier as an opaque string.
    async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Return up to `limit` documents matching `filter`, in store-native
    /// order.
    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Names of the collections visible in the store.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    /// Round-trip connectivity check.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Insert an entity into its collection and return the assigned id.
///
/// The entity's own fields are persisted as-is; the identifier is assigned
/// by the store, never taken from the client.
///
/// # Errors
///
/// Returns [`StoreError`] if serialization or the insert fails.
pub async fn create_document<E>(store: &dyn DocumentStore, entity: &E) -> Result<String, StoreError>
where
    E: Entity + Serialize + Sync,
{
    let document = bson::to_document(entity)?;
    store.insert(E::COLLECTION, document).await
}

/// Query an entity's collection.
///
/// # Errors
///
/// Returns [`StoreError`] if the query fails. No matches is `Ok(vec![])`.
pub async fn get_documents<E: Entity>(
    store: &dyn DocumentStore,
    filter: &Filter,
    limit: i64,
) -> Result<Vec<Document>, StoreError> {
    store.find(E::COLLECTION, filter, limit).await
}

/// Convert a stored document into its public JSON form.
///
/// The store-assigned `_id` is renamed to a public `id` string field; all
/// other fields pass through unchanged.
#[must_use]
pub fn serialize_document(mut document: Document) -> serde_json::Value {
    if let Ok(id) = document.get_object_id("_id") {
        document.remove("_id");
        document.insert("id", id.to_hex());
    }
    bson::Bson::Document(document).into_relaxed_extjson()
}

/// Evaluate a single condition against a document.
///
/// Only string fields are filterable; a missing or non-string field never
/// matches, mirroring how the store treats predicates on absent values.
fn condition_matches(condition: &Condition, document: &Document) -> bool {
    match condition {
        Condition::Eq { field, value } => document.get_str(field).is_ok_and(|s| s == value),
        Condition::Contains { field, term } => document
            .get_str(field)
            .is_ok_and(|s| s.to_lowercase().contains(&term.to_lowercase())),
    }
}

/// Evaluate a structured filter against a document.
///
/// Used by the in-memory store double and shared with unit tests so both
/// store implementations agree on filter semantics.
#[must_use]
pub fn filter_matches(filter: &Filter, document: &Document) -> bool {
    let all_hold = filter
        .required()
        .iter()
        .all(|c| condition_matches(c, document));
    let any_holds = filter.alternatives().is_empty()
        || filter
            .alternatives()
            .iter()
            .any(|c| condition_matches(c, document));
    all_hold && any_holds
}
