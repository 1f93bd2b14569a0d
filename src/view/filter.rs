//! Derived restaurant sequences: name search and featured selection

use crate::entities::Restaurant;

/// Restaurants whose name contains `term`, ignoring case, in source order.
///
/// An empty term matches everything.
pub fn filter_by_name<'a>(restaurants: &'a [Restaurant], term: &str) -> Vec<&'a Restaurant> {
    let needle = term.to_lowercase();

    restaurants
        .iter()
        .filter(|restaurant| restaurant.name.to_lowercase().contains(&needle))
        .collect()
}

/// The first `count` restaurants of the unfiltered collection.
pub fn featured(restaurants: &[Restaurant], count: usize) -> &[Restaurant] {
    &restaurants[..count.min(restaurants.len())]
}
