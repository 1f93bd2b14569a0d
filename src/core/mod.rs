//! Core module containing fundamental traits and types for the crate

pub mod auth;
pub mod entity;
pub mod error;
pub mod field;
pub mod service;

pub use auth::AuthContext;
pub use entity::{Data, Entity};
pub use error::{AppError, DirectoryError, StoreError, StoreResult};
pub use field::FieldValue;
pub use service::DataService;
