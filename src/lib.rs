//! # food-delivery
//!
//! Restaurant listing and menu-item records for a food-delivery client.
//!
//! ## Features
//!
//! - **Restaurant directory**: fetch the full restaurant collection from an
//!   HTTP endpoint (or any record store) behind the [`DirectoryClient`](directory::DirectoryClient) trait
//! - **List view state**: case-insensitive name search, featured carousel
//!   selection and placeholder images, recomputed on demand
//! - **Background load**: one load task per mount, results delivered over a
//!   channel and discarded once the view is gone
//! - **Menu-item store**: `itemId / name / price / description / restaurantId`
//!   records behind [`DataService`](core::DataService), in memory or in MongoDB
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use food_delivery::prelude::*;
//!
//! let config = AppConfig::from_env()?;
//! let client = HttpDirectoryClient::from_config(&config.directory)?;
//!
//! let mut view = RestaurantListView::new(&config.view)?;
//! view.load(client);
//! view.next_message().await;
//!
//! view.set_search_term("piz");
//! let page = view.page(&AuthContext::user("maria"));
//! for card in &page.restaurants {
//!     println!("{} -> {}", card.name, card.menu_link);
//! }
//! ```

pub mod config;
pub mod core;
pub mod directory;
pub mod entities;
pub mod storage;
pub mod telemetry;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AppError, AuthContext, Data, DataService, DirectoryError, Entity, FieldValue, StoreError,
        StoreResult,
    };

    // === Records ===
    pub use crate::entities::{MenuItem, Restaurant, RestaurantId, menu_items_for_restaurant};

    // === Directory ===
    #[cfg(feature = "http")]
    pub use crate::directory::HttpDirectoryClient;
    pub use crate::directory::{DirectoryClient, StoreDirectory};

    // === Storage ===
    pub use crate::storage::InMemoryDataService;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoDataService;

    // === View ===
    pub use crate::view::{
        FeaturedCard, ListPage, LoadState, PlaceholderImages, RestaurantCard, RestaurantListView,
        ViewMessage,
    };

    // === Config ===
    pub use crate::config::{AppConfig, DirectoryConfig, FallbackStrategy, ViewConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
