//! In-memory implementation of OrderStore for testing and development

use crate::core::error::{StorageError, StorageResult};
use crate::core::order::OrderRecord;
use crate::core::store::OrderStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

const BACKEND: &str = "in_memory";

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, OrderRecord>,
    last_id: i64,
}

/// In-memory order store
///
/// Uses RwLock for thread-safe access. Generated ids are assigned under the
/// write lock and always exceed every id already stored, including
/// client-supplied ones.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryOrderStore {
    /// Create a new in-memory order store
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned(e: impl std::fmt::Display) -> StorageError {
        StorageError::Unavailable {
            backend: BACKEND.to_string(),
            message: format!("lock poisoned: {}", e),
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn create(&self, mut record: OrderRecord) -> StorageResult<OrderRecord> {
        let mut table = self.table.write().map_err(Self::poisoned)?;

        let id = match record.id {
            Some(id) => {
                if table.rows.contains_key(&id) {
                    return Err(StorageError::ConstraintViolation {
                        constraint: Some("orders_pkey".to_string()),
                        message: format!("order with id {} already exists", id),
                    });
                }
                id
            }
            None => table
                .last_id
                .checked_add(1)
                .ok_or_else(|| StorageError::ConstraintViolation {
                    constraint: Some("orders_pkey".to_string()),
                    message: "id sequence exhausted".to_string(),
                })?,
        };

        table.last_id = table.last_id.max(id);
        record.id = Some(id);
        table.rows.insert(id, record.clone());

        Ok(record)
    }

    async fn list_all(&self) -> StorageResult<Vec<OrderRecord>> {
        let table = self.table.read().map_err(Self::poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }
}
