//! Persistence abstraction for order records

use crate::core::error::StorageResult;
use crate::core::order::OrderRecord;
use async_trait::async_trait;

/// Store trait for order records
///
/// Implementations own their connection handling and must keep identifier
/// assignment safe under concurrent `create` calls.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Short backend name used in logs and errors
    fn backend(&self) -> &'static str;

    /// Persist a record
    ///
    /// Assigns an identifier when `record.id` is `None` and returns the stored
    /// record with its identifier populated. Fails with
    /// `StorageError::ConstraintViolation` on a duplicate id and with
    /// `StorageError::Unavailable` when the backend cannot be reached.
    async fn create(&self, record: OrderRecord) -> StorageResult<OrderRecord>;

    /// All persisted records in identifier order
    async fn list_all(&self) -> StorageResult<Vec<OrderRecord>>;
}
