//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoDataService<T>` backed by a MongoDB database via
//! `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! food-delivery = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! One collection per record type, named by `T::resource_name()`
//! (`menuitems` for [`MenuItem`](crate::entities::MenuItem)). Records are
//! stored under their wire field names and looked up by `T::id_field()`;
//! MongoDB's own `_id` is assigned by the server and stripped on read.

use crate::core::{Data, DataService, StoreError, StoreResult};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{self, Bson, Document, doc};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Generic record storage service backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use food_delivery::storage::MongoDataService;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let db = client.database("food-delivery");
/// let service = MongoDataService::<MenuItem>::new(db);
/// let item = service.create(item).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoDataService<T> {
    database: Database,
    _marker: std::marker::PhantomData<T>,
}

impl<T> MongoDataService<T> {
    /// Create a new `MongoDataService` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            database,
            _marker: std::marker::PhantomData,
        }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl<T: Data + Serialize + DeserializeOwned> MongoDataService<T> {
    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::resource_name())
    }

    fn id_filter(id: &str) -> Document {
        let key = T::id_field();
        doc! { key: id }
    }

    fn backend_error(operation: &str, e: impl ToString) -> StoreError {
        StoreError::backend(T::resource_name_singular(), operation, e)
    }

    fn serialization_error(e: impl ToString) -> StoreError {
        StoreError::Serialization {
            entity_type: T::resource_name_singular().to_string(),
            message: e.to_string(),
        }
    }

    fn record_to_document(record: &T) -> StoreResult<Document> {
        bson::to_document(record).map_err(Self::serialization_error)
    }

    fn document_to_record(mut doc: Document) -> StoreResult<T> {
        doc.remove("_id");
        bson::from_document(doc).map_err(Self::serialization_error)
    }

    async fn collect(&self, filter: Document, operation: &str) -> StoreResult<Vec<T>> {
        let cursor = self
            .collection()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| Self::backend_error(operation, e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| Self::backend_error(operation, e))?;

        docs.into_iter().map(Self::document_to_record).collect()
    }
}

#[async_trait]
impl<T: Data + Serialize + DeserializeOwned> DataService<T> for MongoDataService<T> {
    /// Insert a new record into the collection.
    ///
    /// The existence check and the insert are two round trips; without a
    /// unique index on the id field, concurrent creates can both succeed.
    async fn create(&self, record: T) -> StoreResult<T> {
        let existing = self
            .collection()
            .find_one(Self::id_filter(record.id()))
            .await
            .map_err(|e| Self::backend_error("create", e))?;

        if existing.is_some() {
            return Err(StoreError::AlreadyExists {
                entity_type: T::resource_name_singular().to_string(),
                id: record.id().to_string(),
            });
        }

        let doc = Self::record_to_document(&record)?;
        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| Self::backend_error("create", e))?;

        tracing::debug!(entity = T::resource_name_singular(), id = record.id(), "record created");
        Ok(record)
    }

    /// Returns `Ok(None)` if the record does not exist.
    async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        let doc = self
            .collection()
            .find_one(Self::id_filter(id))
            .await
            .map_err(|e| Self::backend_error("get", e))?;

        doc.map(Self::document_to_record).transpose()
    }

    /// List all records in insertion order.
    async fn list(&self) -> StoreResult<Vec<T>> {
        self.collect(doc! {}, "list").await
    }

    /// Replace an existing record.
    ///
    /// Returns `NotFound` if no document matched.
    async fn update(&self, id: &str, record: T) -> StoreResult<T> {
        let doc = Self::record_to_document(&record)?;

        let result = self
            .collection()
            .replace_one(Self::id_filter(id), doc)
            .await
            .map_err(|e| Self::backend_error("update", e))?;

        if result.matched_count == 0 {
            return Err(StoreError::not_found(T::resource_name_singular(), id));
        }

        tracing::debug!(entity = T::resource_name_singular(), id, "record updated");
        Ok(record)
    }

    /// Silently succeeds if the record does not exist.
    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.collection()
            .delete_one(Self::id_filter(id))
            .await
            .map_err(|e| Self::backend_error("delete", e))?;

        Ok(())
    }

    /// Search records by field value.
    ///
    /// Values arrive as strings but are stored with native BSON types, so the
    /// query matches any of the plausible typed variants with `$in`.
    async fn search(&self, field: &str, value: &str) -> StoreResult<Vec<T>> {
        let mut variants: Vec<Bson> = vec![Bson::String(value.to_string())];

        match value {
            "true" => variants.push(Bson::Boolean(true)),
            "false" => variants.push(Bson::Boolean(false)),
            _ => {
                if let Ok(i) = value.parse::<i64>() {
                    variants.push(Bson::Int64(i));
                } else if let Ok(f) = value.parse::<f64>() {
                    variants.push(Bson::Double(f));
                }
            }
        }

        self.collect(doc! { field: { "$in": variants } }, "search")
            .await
    }
}
