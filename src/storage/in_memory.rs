//! In-memory implementation of DataService for testing and development

use crate::core::{Data, DataService, StoreError, StoreResult};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory record store
///
/// Keeps records in insertion order. Uses RwLock for thread-safe access;
/// clones share the same underlying map.
#[derive(Clone)]
pub struct InMemoryDataService<T> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T> InMemoryDataService<T> {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T: Data> InMemoryDataService<T> {
    /// Create a store pre-filled with records, keyed by their ids.
    ///
    /// When two records share an id the later one replaces the earlier one
    /// but keeps its position; each replacement is logged as a warning.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let mut seeded = IndexMap::new();
        for record in records {
            let id = record.id().to_string();
            if seeded.contains_key(&id) {
                tracing::warn!(
                    entity = T::resource_name_singular(),
                    id = %id,
                    "duplicate id in seed records, keeping the later record"
                );
            }
            seeded.insert(id, record);
        }

        Self {
            records: Arc::new(RwLock::new(seeded)),
        }
    }

    fn lock_error(operation: &str, e: impl ToString) -> StoreError {
        StoreError::backend(T::resource_name_singular(), operation, e)
    }
}

impl<T> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Data> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, record: T) -> StoreResult<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Self::lock_error("create", e))?;

        if records.contains_key(record.id()) {
            return Err(StoreError::AlreadyExists {
                entity_type: T::resource_name_singular().to_string(),
                id: record.id().to_string(),
            });
        }

        tracing::debug!(entity = T::resource_name_singular(), id = record.id(), "record created");
        records.insert(record.id().to_string(), record.clone());

        Ok(record)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<T>> {
        let records = self.records.read().map_err(|e| Self::lock_error("get", e))?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<T>> {
        let records = self.records.read().map_err(|e| Self::lock_error("list", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn update(&self, id: &str, record: T) -> StoreResult<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Self::lock_error("update", e))?;

        let slot = records
            .get_mut(id)
            .ok_or_else(|| StoreError::not_found(T::resource_name_singular(), id))?;

        *slot = record.clone();
        tracing::debug!(entity = T::resource_name_singular(), id, "record updated");

        Ok(record)
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Self::lock_error("delete", e))?;

        if records.shift_remove(id).is_some() {
            tracing::debug!(entity = T::resource_name_singular(), id, "record deleted");
        }

        Ok(())
    }

    async fn search(&self, field: &str, value: &str) -> StoreResult<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| Self::lock_error("search", e))?;

        Ok(records
            .values()
            .filter(|record| {
                record
                    .field_value(field)
                    .is_some_and(|v| v.matches_str(value))
            })
            .cloned()
            .collect())
    }
}
