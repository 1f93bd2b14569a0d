//! Render-ready view models for the listing page
//!
//! Hosts turn these into markup; nothing here knows about HTML.

use crate::entities::{Restaurant, RestaurantId};
use serde::Serialize;

/// One slide of the featured carousel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedCard {
    pub key: RestaurantId,
    pub image: String,
    pub name: String,
    pub description: Option<String>,
}

impl FeaturedCard {
    pub fn new(restaurant: &Restaurant, image: &str) -> Self {
        Self {
            key: restaurant.restaurant_id.clone(),
            image: image.to_string(),
            name: restaurant.name.clone(),
            description: restaurant.description.clone(),
        }
    }
}

/// One card of the restaurant grid, linking to the menu page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantCard {
    pub key: RestaurantId,
    pub image: String,
    pub name: String,
    pub menu_link: String,
}

impl RestaurantCard {
    pub fn new(restaurant: &Restaurant, image: &str) -> Self {
        Self {
            key: restaurant.restaurant_id.clone(),
            image: image.to_string(),
            name: restaurant.name.clone(),
            menu_link: restaurant.menu_path(),
        }
    }
}

/// Everything the listing page shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage {
    pub greeting: String,
    pub search_term: String,
    pub featured: Vec<FeaturedCard>,
    pub restaurants: Vec<RestaurantCard>,
}
