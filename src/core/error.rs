//! Typed error handling for the food-delivery crate
//!
//! Clients can match specific failures instead of dealing with generic
//! `anyhow::Error` values.
//!
//! # Error Categories
//!
//! - [`DirectoryError`]: the restaurant directory could not be fetched or parsed
//! - [`StoreError`]: record store operations
//! - [`AppError`]: umbrella type wrapping both
//!
//! # Example
//!
//! ```rust,ignore
//! match client.fetch_restaurants().await {
//!     Ok(restaurants) => println!("{} restaurants", restaurants.len()),
//!     Err(DirectoryError::Status { status, .. }) => eprintln!("HTTP {status}"),
//!     Err(e) => eprintln!("directory unavailable: {e}"),
//! }
//! ```

use thiserror::Error;

/// Failure to obtain the restaurant collection from the directory service.
///
/// Transport errors, non-2xx responses and unparsable bodies are all the
/// same "fetch failed" outcome to the list view; the variants only exist so
/// the diagnostic log says which one happened.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The request never produced a response (DNS, connect, timeout, ...)
    #[error("directory request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-success status
    #[error("directory at {url} responded with status {status}")]
    Status { url: String, status: u16 },

    /// The body was not a JSON array of restaurant records
    #[error("malformed directory payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// A non-HTTP directory source failed
    #[error("directory source failed: {0}")]
    Source(String),
}

impl DirectoryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DirectoryError::Transport { .. } => "DIRECTORY_TRANSPORT",
            DirectoryError::Status { .. } => "DIRECTORY_STATUS",
            DirectoryError::Parse(_) => "DIRECTORY_PARSE",
            DirectoryError::Source(_) => "DIRECTORY_SOURCE",
        }
    }
}

/// Errors related to record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: String },

    /// A record with the same id is already stored
    #[error("{entity_type} with id '{id}' already exists")]
    AlreadyExists { entity_type: String, id: String },

    /// Failed to serialize/deserialize a record
    #[error("Failed to serialize/deserialize {entity_type}: {message}")]
    Serialization {
        entity_type: String,
        message: String,
    },

    /// Storage backend failure (lock poisoning, driver error, ...)
    #[error("Failed to {operation} {entity_type}: {message}")]
    Backend {
        entity_type: String,
        operation: String,
        message: String,
    },
}

impl StoreError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        StoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn backend(entity_type: &str, operation: &str, message: impl ToString) -> Self {
        StoreError::Backend {
            entity_type: entity_type.to_string(),
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "RECORD_NOT_FOUND",
            StoreError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
            StoreError::Serialization { .. } => "RECORD_SERIALIZATION_ERROR",
            StoreError::Backend { .. } => "STORE_BACKEND_ERROR",
        }
    }
}

/// Result alias for record store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The main error type for the crate
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Directory(e) => e.error_code(),
            AppError::Store(e) => e.error_code(),
        }
    }
}
