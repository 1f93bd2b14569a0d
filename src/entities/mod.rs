//! Record types for the food-delivery domain

pub mod menu_item;
pub mod restaurant;

pub use menu_item::{MenuItem, menu_items_for_restaurant};
pub use restaurant::{Restaurant, RestaurantId};
