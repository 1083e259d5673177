//! # orders-rs
//!
//! A small order ingestion service: an HTTP endpoint accepts an order
//! payload, validates it, maps it to a persisted record and stores it.
//!
//! ## Features
//!
//! - **Explicit mapping**: field-by-field conversion between the wire shape
//!   ([`OrderDto`](core::OrderDto)) and the stored shape
//!   ([`OrderRecord`](core::OrderRecord))
//! - **Pluggable priority**: the priority flag is derived by a named
//!   [`PriorityPolicy`](core::PriorityPolicy)
//! - **Two id policies**: server-generated or client-supplied identifiers,
//!   chosen per deployment
//! - **Storage backends**: in-memory (default) and PostgreSQL (`postgres`
//!   feature)
//! - **Typed errors**: validation, constraint and availability failures map to
//!   stable codes and HTTP statuses
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! let service = OrderService::new(
//!     Arc::new(InMemoryOrderStore::new()),
//!     OrderMapper::default(),
//! );
//!
//! let stored = service.submit(OrderDto::new("John Doe", 100.0)).await?;
//! assert!(stored.id.is_some());
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{
            ConfigError, ErrorResponse, FieldValidationError, OrderError, OrderResult,
            RequestError, StorageError, StorageResult, ValidationError,
        },
        mapper::{AmountThreshold, NoPriority, OrderMapper, PriorityPolicy},
        order::{IdPolicy, OrderDto, OrderRecord},
        service::OrderService,
        store::OrderStore,
        validation::validate_order,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderStore;

    // === Config ===
    pub use crate::config::{
        LoggingConfig, PriorityConfig, PriorityPolicyKind, ServerConfig, ServiceConfig,
        StorageBackend, StorageConfig,
    };

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
}
