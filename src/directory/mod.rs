//! Restaurant directory sources
//!
//! The list view talks to the directory only through [`DirectoryClient`], so
//! the load routine can be driven by the real HTTP service, a record store,
//! or a test double.
//!
//! ```text
//! RestaurantListView::load ──▶ DirectoryClient::fetch_restaurants
//!                                 ├── HttpDirectoryClient  (GET {url})
//!                                 └── StoreDirectory<S>    (DataService<Restaurant>)
//! ```

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpDirectoryClient;

use crate::core::{DataService, DirectoryError};
use crate::entities::Restaurant;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of the full restaurant collection
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch every restaurant, in the order the source returns them
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, DirectoryError>;
}

#[async_trait]
impl<C: DirectoryClient + ?Sized> DirectoryClient for Arc<C> {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, DirectoryError> {
        (**self).fetch_restaurants().await
    }
}

/// Directory served from a record store
///
/// Useful for local development and tests where no HTTP service is running.
#[derive(Clone)]
pub struct StoreDirectory<S> {
    store: S,
}

impl<S> StoreDirectory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<S: DataService<Restaurant>> DirectoryClient for StoreDirectory<S> {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, DirectoryError> {
        self.store
            .list()
            .await
            .map_err(|e| DirectoryError::Source(e.to_string()))
    }
}
