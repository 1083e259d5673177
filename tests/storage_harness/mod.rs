//! Shared test harness for order store testing
//!
//! Provides record/DTO builders and the `order_store_tests!` and
//! `rest_integration_tests!` macros, which any backend test file can invoke
//! with a factory expression.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! order_store_tests!(InMemoryOrderStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod order_store_tests;
#[macro_use]
pub mod integration;

use orders::core::order::{OrderDto, OrderRecord};

/// An unsaved record with a server-assigned id
pub fn record(customer_name: &str, total_amount: f64) -> OrderRecord {
    OrderRecord::new(customer_name, total_amount, false)
}

/// An unsaved record with a client-chosen id
pub fn record_with_id(id: i64, customer_name: &str, total_amount: f64) -> OrderRecord {
    OrderRecord::new(customer_name, total_amount, true).with_id(id)
}

/// The canonical happy-path payload
pub fn john_doe() -> OrderDto {
    OrderDto::new("John Doe", 100.0)
}
