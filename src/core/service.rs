//! Service trait for record store operations

use crate::core::Data;
use crate::core::error::StoreResult;
use async_trait::async_trait;

/// Service trait for managing persisted records
///
/// Implementations provide CRUD operations for a specific record type.
/// The crate is agnostic to the underlying storage mechanism.
#[async_trait]
pub trait DataService<T: Data>: Send + Sync {
    /// Store a new record. Fails with `AlreadyExists` if the id is taken.
    async fn create(&self, record: T) -> StoreResult<T>;

    /// Get a record by id
    async fn get(&self, id: &str) -> StoreResult<Option<T>>;

    /// List all records
    async fn list(&self) -> StoreResult<Vec<T>>;

    /// Replace an existing record. Fails with `NotFound` if the id is unknown.
    async fn update(&self, id: &str, record: T) -> StoreResult<T>;

    /// Delete a record. Deleting an unknown id is not an error.
    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Search records by field value
    async fn search(&self, field: &str, value: &str) -> StoreResult<Vec<T>>;
}
