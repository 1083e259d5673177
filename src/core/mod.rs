//! Core module containing the order types, mapping, validation and the
//! ingestion service

pub mod error;
pub mod mapper;
pub mod order;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{OrderError, OrderResult, StorageError, ValidationError};
pub use mapper::{AmountThreshold, NoPriority, OrderMapper, PriorityPolicy};
pub use order::{IdPolicy, OrderDto, OrderRecord};
pub use service::OrderService;
pub use store::OrderStore;
