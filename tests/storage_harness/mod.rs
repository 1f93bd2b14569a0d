//! Shared test harness for storage backend testing
//!
//! Provides helpers for building `MenuItem` fixtures and the
//! `data_service_tests!` conformance suite.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod data_service_tests;

use food_delivery::entities::MenuItem;

// ---------------------------------------------------------------------------
// Helper functions — MenuItem creation
// ---------------------------------------------------------------------------

/// Create a fully populated `MenuItem`.
pub fn create_test_item(
    item_id: &str,
    name: &str,
    price: f64,
    description: &str,
    restaurant_id: &str,
) -> MenuItem {
    MenuItem::new(item_id)
        .with_name(name)
        .with_price(price)
        .with_description(description)
        .for_restaurant(restaurant_id)
}

/// Generate `n` items spread over three restaurants (`r-0`, `r-1`, `r-2`).
///
/// Prices are 1.5, 3.0, 4.5, ... so every item has a distinct price.
pub fn sample_batch(n: usize) -> Vec<MenuItem> {
    (0..n)
        .map(|i| {
            create_test_item(
                &format!("item-{}", i),
                &format!("Dish {}", i),
                (i as f64 + 1.0) * 1.5,
                &format!("Description of dish {}", i),
                &format!("r-{}", i % 3),
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Assertions helpers
// ---------------------------------------------------------------------------

/// Assert that a list contains exactly `n` items.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Ids of the given items, in order.
pub fn item_ids(items: &[MenuItem]) -> Vec<String> {
    items.iter().map(|item| item.item_id.clone()).collect()
}
