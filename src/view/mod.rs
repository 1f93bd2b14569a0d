//! Restaurant listing: state, derived sequences and the directory load

pub mod cards;
pub mod filter;
pub mod images;
pub mod list;
pub mod loader;

pub use cards::{FeaturedCard, ListPage, RestaurantCard};
pub use filter::{featured, filter_by_name};
pub use images::PlaceholderImages;
pub use list::{LoadState, RestaurantListView};
pub use loader::{Delivery, MountGuard, MountHandle, ViewMessage, fetch_directory, spawn_load};
