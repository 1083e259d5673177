//! Integration test infrastructure for order stores.
//!
//! Builds the real REST router around any `OrderStore` so backends can be
//! validated through the full HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by build_test_router)
//!         ├─ POST /orders  → create_order → OrderService::submit → OrderStore::create
//!         ├─ GET  /orders  → list_orders  → OrderService::list   → OrderStore::list_all
//!         └─ GET  /health
//! ```

#[macro_use]
pub mod rest_tests;

use axum::Router;
use orders::config::ServiceConfig;
use orders::core::order::IdPolicy;
use orders::core::store::OrderStore;
use orders::server::ServerBuilder;
use std::sync::Arc;

/// Build the production router over `store` with the given id policy
pub fn build_test_router(store: Arc<dyn OrderStore>, ids: IdPolicy) -> Router {
    let config = ServiceConfig {
        ids,
        ..ServiceConfig::default()
    };

    ServerBuilder::new()
        .with_config(config)
        .with_shared_store(store)
        .build()
        .expect("Failed to build test router")
}
