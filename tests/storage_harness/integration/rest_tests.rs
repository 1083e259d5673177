//! REST integration test macro for order stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that validate
//! an `OrderStore` through full REST round-trips:
//! JSON → HTTP request → handler → service → store → HTTP response.
//!
//! # Generated Tests
//!
//! - `test_rest_create_then_list`: POST 200 with empty body, GET returns the order
//! - `test_rest_negative_amount`: POST 400 VALIDATION_ERROR, nothing stored
//! - `test_rest_missing_fields`: POST 400 listing every missing field
//! - `test_rest_malformed_amount`: POST with a string amount → 400
//! - `test_rest_client_ids`: client-supplied deployment: 200, then duplicate → 409

/// Generate a REST integration test suite for an order store.
///
/// `$factory` must produce a fresh `impl OrderStore + 'static`.
#[macro_export]
macro_rules! rest_integration_tests {
    ($factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use orders::core::order::IdPolicy;
            use orders::core::store::OrderStore;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server(ids: IdPolicy) -> TestServer {
                let store: Arc<dyn OrderStore> = Arc::new($factory);
                let router = storage_harness::integration::build_test_router(store, ids);
                TestServer::new(router)
            }

            #[tokio::test]
            async fn test_rest_create_then_list() {
                let server = make_server(IdPolicy::ServerGenerated).await;

                let response = server
                    .post("/orders")
                    .json(&json!({ "customerName": "John Doe", "totalAmount": 100.0 }))
                    .await;

                response.assert_status_ok();
                assert!(response.text().is_empty());

                let listed: Vec<Value> = server.get("/orders").await.json();
                assert_eq!(listed.len(), 1);
                assert_eq!(listed[0]["customerName"], "John Doe");
                assert_eq!(listed[0]["totalAmount"], 100.0);
                assert!(listed[0]["id"].is_i64());
                assert!(listed[0].get("priority").is_none());
            }

            #[tokio::test]
            async fn test_rest_negative_amount() {
                let server = make_server(IdPolicy::ServerGenerated).await;

                let response = server
                    .post("/orders")
                    .json(&json!({ "customerName": "Jane", "totalAmount": -5.0 }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
                assert_eq!(body["details"]["fields"][0]["field"], "totalAmount");

                let listed: Vec<Value> = server.get("/orders").await.json();
                assert!(listed.is_empty());
            }

            #[tokio::test]
            async fn test_rest_missing_fields() {
                let server = make_server(IdPolicy::ServerGenerated).await;

                let response = server.post("/orders").json(&json!({})).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                let fields: Vec<&str> = body["details"]["fields"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|f| f["field"].as_str().unwrap())
                    .collect();
                assert_eq!(fields, vec!["customerName", "totalAmount"]);
            }

            #[tokio::test]
            async fn test_rest_malformed_amount() {
                let server = make_server(IdPolicy::ServerGenerated).await;

                let response = server
                    .post("/orders")
                    .json(&json!({ "customerName": "Jane", "totalAmount": "lots" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "VALIDATION_ERROR");
            }

            #[tokio::test]
            async fn test_rest_client_ids() {
                let server = make_server(IdPolicy::ClientSupplied).await;
                let payload = json!({
                    "id": 7,
                    "customerName": "Jane",
                    "totalAmount": 10.0,
                    "priority": true
                });

                server.post("/orders").json(&payload).await.assert_status_ok();

                let duplicate = server.post("/orders").json(&payload).await;
                duplicate.assert_status(StatusCode::CONFLICT);
                let body: Value = duplicate.json();
                assert_eq!(body["code"], "CONSTRAINT_VIOLATION");

                let listed: Vec<Value> = server.get("/orders").await.json();
                assert_eq!(listed.len(), 1);
                assert_eq!(listed[0]["id"], 7);
            }
        }
    };
}
