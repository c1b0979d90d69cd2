//! MongoDB implementation of the document store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;

use campus_market_core::{Condition, Filter};

use super::{DocumentStore, StoreError};
use crate::config::ServerConfig;

/// Document store backed by a MongoDB database.
///
/// Created once at startup and shared across all handlers; the driver's own
/// connection pooling and per-document write atomicity are relied upon.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to the database named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the connection string is invalid or the
    /// client cannot be created.
    pub async fn connect(config: &ServerConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.database_url.expose_secret()).await?;
        let database = client.database(&config.database_name);
        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id.to_hex()),
            other => Err(StoreError::Unavailable(format!(
                "insert returned unexpected id type: {other}"
            ))),
        }
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(to_query(filter))
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database.list_collection_names().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

/// Translate a structured filter into a MongoDB query document.
fn to_query(filter: &Filter) -> Document {
    let mut query = Document::new();
    for condition in filter.required() {
        let (field, value) = condition_to_bson(condition);
        query.insert(field, value);
    }
    if !filter.alternatives().is_empty() {
        let branches: Vec<Document> = filter
            .alternatives()
            .iter()
            .map(|condition| {
                let (field, value) = condition_to_bson(condition);
                let mut branch = Document::new();
                branch.insert(field, value);
                branch
            })
            .collect();
        query.insert("$or", branches);
    }
    query
}

/// Translate one condition into a field/value pair.
///
/// Substring terms are regex-escaped so user input is always matched
/// literally, never interpreted as pattern syntax.
fn condition_to_bson(condition: &Condition) -> (String, Bson) {
    match condition {
        Condition::Eq { field, value } => ((*field).to_string(), Bson::String(value.clone())),
        Condition::Contains { field, term } => (
            (*field).to_string(),
            Bson::Document(doc! { "$regex": regex::escape(term), "$options": "i" }),
        ),
    }
}
