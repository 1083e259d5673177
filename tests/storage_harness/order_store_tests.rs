//! Macro-generated test suite for `OrderStore` contract validation.
//!
//! # Generated Tests
//!
//! ## Create / List
//! - `test_list_empty`: list on empty store returns empty vec
//! - `test_create_assigns_id`: create without id returns a populated id
//! - `test_create_keeps_client_id`: explicit id is stored as given
//! - `test_read_after_write`: created record is visible to `list_all`
//! - `test_list_in_id_order`: records come back sorted by id
//!
//! ## Constraints
//! - `test_duplicate_id_is_constraint_violation`: second insert with same id fails, nothing changes
//! - `test_identical_records_get_distinct_ids`: no deduplication
//!
//! ## Concurrency
//! - `test_concurrent_creates`: parallel creates from spawned tasks get unique ids
//!
//! ## Through the service
//! - `test_service_submit_john_doe`: submit then list_all has size 1
//! - `test_service_rejects_negative_amount`: ValidationError, store untouched

/// Generate a full `OrderStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh, empty store implementing
/// `OrderStore + Clone + 'static`. It is re-evaluated for each test.
#[macro_export]
macro_rules! order_store_tests {
    ($factory:expr) => {
        mod order_store_contract_tests {
            use super::*;
            use orders::core::error::{OrderError, StorageError};
            use orders::core::mapper::OrderMapper;
            use orders::core::service::OrderService;
            use orders::core::store::OrderStore;
            use orders::core::order::OrderDto;
            use std::collections::HashSet;
            use std::sync::Arc;

            // ==================================================================
            // Create / List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;

                let all = store.list_all().await.unwrap();
                assert!(all.is_empty(), "List on empty store should return empty vec");
            }

            #[tokio::test]
            async fn test_create_assigns_id() {
                let store = $factory;

                let created = store.create(record("Alice", 12.5)).await.unwrap();

                assert!(created.id.is_some(), "Store must populate the id");
                assert_eq!(created.customer_name, "Alice");
                assert!((created.total_amount - 12.5).abs() < f64::EPSILON);
                assert!(!created.priority);
            }

            #[tokio::test]
            async fn test_create_keeps_client_id() {
                let store = $factory;

                let created = store.create(record_with_id(42, "Bob", 3.0)).await.unwrap();

                assert_eq!(created.id, Some(42));
                assert!(created.priority);
            }

            #[tokio::test]
            async fn test_read_after_write() {
                let store = $factory;

                let created = store.create(record("Carol", 7.0)).await.unwrap();
                let all = store.list_all().await.unwrap();

                assert_eq!(all, vec![created]);
            }

            #[tokio::test]
            async fn test_list_in_id_order() {
                let store = $factory;

                store.create(record_with_id(30, "c", 1.0)).await.unwrap();
                store.create(record_with_id(10, "a", 1.0)).await.unwrap();
                store.create(record_with_id(20, "b", 1.0)).await.unwrap();

                let ids: Vec<_> = store
                    .list_all()
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|r| r.id)
                    .collect();
                assert_eq!(ids, vec![Some(10), Some(20), Some(30)]);
            }

            // ==================================================================
            // Constraints
            // ==================================================================

            #[tokio::test]
            async fn test_duplicate_id_is_constraint_violation() {
                let store = $factory;
                store.create(record_with_id(5, "first", 1.0)).await.unwrap();

                let err = store
                    .create(record_with_id(5, "second", 2.0))
                    .await
                    .unwrap_err();

                assert!(
                    matches!(err, StorageError::ConstraintViolation { .. }),
                    "expected ConstraintViolation, got {:?}",
                    err
                );
                let all = store.list_all().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0].customer_name, "first");
            }

            #[tokio::test]
            async fn test_identical_records_get_distinct_ids() {
                let store = $factory;

                let a = store.create(record("Same", 1.0)).await.unwrap();
                let b = store.create(record("Same", 1.0)).await.unwrap();

                assert_ne!(a.id, b.id);
                assert_eq!(store.list_all().await.unwrap().len(), 2);
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_creates() {
                let store = $factory;

                let handles: Vec<_> = (0..10)
                    .map(|i| {
                        let store = store.clone();
                        tokio::spawn(async move {
                            store
                                .create(record(&format!("customer-{}", i), i as f64))
                                .await
                        })
                    })
                    .collect();

                let results = futures_util::future::join_all(handles).await;
                let ids: HashSet<i64> = results
                    .into_iter()
                    .map(|r| r.unwrap().unwrap().id.unwrap())
                    .collect();

                assert_eq!(ids.len(), 10, "Every concurrent create needs its own id");
                assert_eq!(store.list_all().await.unwrap().len(), 10);
            }

            // ==================================================================
            // Through the service
            // ==================================================================

            #[tokio::test]
            async fn test_service_submit_john_doe() {
                let store = $factory;
                let service = OrderService::new(Arc::new(store.clone()), OrderMapper::default());

                service.submit(john_doe()).await.unwrap();

                let all = store.list_all().await.unwrap();
                assert_eq!(all.len(), 1);
                assert_eq!(all[0].customer_name, "John Doe");
                assert_eq!(all[0].total_amount, 100.0);
            }

            #[tokio::test]
            async fn test_service_rejects_negative_amount() {
                let store = $factory;
                let service = OrderService::new(Arc::new(store.clone()), OrderMapper::default());

                let err = service
                    .submit(OrderDto::new("Jane", -5.0))
                    .await
                    .unwrap_err();

                assert!(matches!(err, OrderError::Validation(_)));
                assert!(store.list_all().await.unwrap().is_empty());
            }
        }
    };
}
