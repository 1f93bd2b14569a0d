//! Macro-generated test suite for `DataService<MenuItem>` contract validation.
//!
//! The `data_service_tests!` macro generates a test module that validates any
//! `DataService<MenuItem>` implementation against the full contract: CRUD
//! operations, search across string and numeric fields, edge cases, and
//! concurrent access.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use food_delivery::storage::InMemoryDataService;
//!
//! data_service_tests!(InMemoryDataService::<MenuItem>::new());
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_and_get`: create then retrieve, verify all fields
//! - `test_sparse_record`: a record with only its id survives the round trip
//! - `test_get_nonexistent`: unknown id returns None
//! - `test_list_empty` / `test_list_multiple`
//! - `test_update_existing` / `test_update_nonexistent`
//! - `test_delete_existing` / `test_delete_nonexistent`
//!
//! ## Search
//! - `test_search_by_restaurant`: the menu-page query
//! - `test_search_float_field`: search by price
//! - `test_search_no_results` / `test_search_unknown_field`
//!
//! ## Edge Cases
//! - `test_create_duplicate_id`: second create with the same id is rejected
//! - `test_concurrent_access`: parallel creates from spawned tasks

/// Generate a full `DataService<MenuItem>` conformance test suite.
///
/// `$factory` must be an expression that evaluates to an instance implementing
/// `DataService<MenuItem>`. It is re-evaluated for each test to ensure
/// isolation. For the concurrent access test, the returned service must also
/// implement `Clone + 'static` (shared state via Arc pattern).
#[macro_export]
macro_rules! data_service_tests {
    ($factory:expr) => {
        mod data_service_contract_tests {
            use super::*;
            use food_delivery::core::StoreError;
            use food_delivery::core::entity::{Data, Entity};
            use food_delivery::core::service::DataService;
            use food_delivery::entities::{MenuItem, menu_items_for_restaurant};

            // ==================================================================
            // CRUD: Create & Get
            // ==================================================================

            #[tokio::test]
            async fn test_create_and_get() {
                let service = $factory;
                let item = create_test_item("i-1", "Margherita", 9.5, "Tomato, mozzarella", "r-1");

                let created = service.create(item.clone()).await.unwrap();
                assert_eq!(created, item);

                let retrieved = service.get("i-1").await.unwrap();
                assert!(retrieved.is_some(), "Item should exist after create");
                let retrieved = retrieved.unwrap();
                assert_eq!(retrieved.id(), "i-1");
                assert_eq!(retrieved.name(), "Margherita");
                assert_eq!(retrieved.price, Some(9.5));
                assert_eq!(retrieved.description.as_deref(), Some("Tomato, mozzarella"));
                assert_eq!(retrieved.restaurant_id.as_deref(), Some("r-1"));
            }

            #[tokio::test]
            async fn test_sparse_record() {
                let service = $factory;

                service.create(MenuItem::new("bare")).await.unwrap();

                let retrieved = service.get("bare").await.unwrap().unwrap();
                assert_eq!(retrieved, MenuItem::new("bare"));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;

                let result = service.get("no-such-item").await.unwrap();
                assert!(result.is_none(), "Getting a nonexistent item should return None");
            }

            #[tokio::test]
            async fn test_list_empty() {
                let service = $factory;

                let all = service.list().await.unwrap();
                assert!(all.is_empty(), "List on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let service = $factory;
                let batch = sample_batch(5);
                let expected = item_ids(&batch);

                for item in batch {
                    service.create(item).await.unwrap();
                }

                let all = service.list().await.unwrap();
                assert_count(&all, 5);
                assert_eq!(item_ids(&all), expected, "List should keep insertion order");
            }

            // ==================================================================
            // CRUD: Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let service = $factory;
                let mut item = create_test_item("i-2", "Pad Thai", 11.0, "Noodles", "r-2");

                service.create(item.clone()).await.unwrap();

                item.name = Some("Pad See Ew".to_string());
                item.price = Some(12.5);

                let updated = service.update("i-2", item).await.unwrap();
                assert_eq!(updated.name(), "Pad See Ew");

                let retrieved = service.get("i-2").await.unwrap().unwrap();
                assert_eq!(retrieved.name(), "Pad See Ew");
                assert_eq!(retrieved.price, Some(12.5));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let service = $factory;
                let item = create_test_item("ghost", "Ghost", 0.0, "", "r-0");

                let result = service.update("ghost", item).await;
                assert!(
                    matches!(result, Err(StoreError::NotFound { .. })),
                    "Updating a nonexistent item should return NotFound"
                );
            }

            // ==================================================================
            // CRUD: Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let service = $factory;
                service
                    .create(create_test_item("i-3", "Soup", 4.0, "Hot", "r-1"))
                    .await
                    .unwrap();

                assert!(service.get("i-3").await.unwrap().is_some());

                service.delete("i-3").await.unwrap();

                assert!(
                    service.get("i-3").await.unwrap().is_none(),
                    "Item should be gone after delete"
                );
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let service = $factory;

                service.delete("never-existed").await.unwrap();
            }

            // ==================================================================
            // Search
            // ==================================================================

            #[tokio::test]
            async fn test_search_by_restaurant() {
                let service = $factory;
                for item in sample_batch(6) {
                    service.create(item).await.unwrap();
                }

                let results = menu_items_for_restaurant(&service, "r-1").await.unwrap();
                assert_eq!(item_ids(&results), vec!["item-1", "item-4"]);
                assert!(
                    results
                        .iter()
                        .all(|item| item.restaurant_id.as_deref() == Some("r-1"))
                );
            }

            #[tokio::test]
            async fn test_search_float_field() {
                let service = $factory;
                service
                    .create(create_test_item("cheap", "Fries", 2.5, "Salty", "r-1"))
                    .await
                    .unwrap();
                service
                    .create(create_test_item("pricey", "Lobster", 39.5, "Fresh", "r-1"))
                    .await
                    .unwrap();

                let results = service.search("price", "39.5").await.unwrap();
                assert_eq!(results.len(), 1, "Should find item with price=39.5");
                assert_eq!(results[0].name(), "Lobster");
            }

            #[tokio::test]
            async fn test_search_no_results() {
                let service = $factory;
                service
                    .create(create_test_item("i-4", "Salad", 6.0, "Green", "r-2"))
                    .await
                    .unwrap();

                let results = service.search("name", "Burger").await.unwrap();
                assert!(results.is_empty(), "Search with non-matching value should return empty vec");
            }

            #[tokio::test]
            async fn test_search_unknown_field() {
                let service = $factory;
                service
                    .create(create_test_item("i-5", "Salad", 6.0, "Green", "r-2"))
                    .await
                    .unwrap();

                let results = service.search("calories", "300").await.unwrap();
                assert!(results.is_empty(), "Search on unknown field should return empty vec");
            }

            // ==================================================================
            // Edge case — Duplicate ID
            // ==================================================================

            #[tokio::test]
            async fn test_create_duplicate_id() {
                let service = $factory;

                service
                    .create(create_test_item("dup", "First", 1.0, "", "r-0"))
                    .await
                    .unwrap();
                let result = service
                    .create(create_test_item("dup", "Second", 2.0, "", "r-0"))
                    .await;

                assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
                let retrieved = service.get("dup").await.unwrap().unwrap();
                assert_eq!(retrieved.name(), "First", "First item should remain");
            }

            // ==================================================================
            // Edge case — Concurrent access
            // ==================================================================

            #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
            async fn test_concurrent_access() {
                let service = $factory;
                let s1 = service.clone();
                let s2 = service.clone();

                let a = create_test_item("conc-a", "A", 1.0, "", "r-0");
                let b = create_test_item("conc-b", "B", 2.0, "", "r-0");

                let h1 = tokio::spawn(async move { s1.create(a).await });
                let h2 = tokio::spawn(async move { s2.create(b).await });

                let (r1, r2) = tokio::time::timeout(std::time::Duration::from_secs(30), async {
                    tokio::try_join!(h1, h2).unwrap()
                })
                .await
                .expect("Concurrent creates timed out");

                r1.unwrap();
                r2.unwrap();

                assert!(service.get("conc-a").await.unwrap().is_some());
                assert!(service.get("conc-b").await.unwrap().is_some());
                assert_eq!(MenuItem::resource_name(), "menuitems");
            }
        }
    };
}
