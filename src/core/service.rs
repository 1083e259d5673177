//! Order ingestion service: validate, map, persist

use crate::core::error::OrderResult;
use crate::core::mapper::OrderMapper;
use crate::core::order::{OrderDto, OrderRecord};
use crate::core::store::OrderStore;
use crate::core::validation::validate_order;
use std::sync::Arc;

/// Orchestrates the write path for orders
///
/// Holds one store and one mapper, assembled once at startup. Each call is a
/// single attempt; retry policy belongs to the caller.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    mapper: OrderMapper,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, mapper: OrderMapper) -> Self {
        Self { store, mapper }
    }

    pub fn mapper(&self) -> &OrderMapper {
        &self.mapper
    }

    pub fn store(&self) -> &Arc<dyn OrderStore> {
        &self.store
    }

    /// Validate, map and persist one order
    ///
    /// An invalid transfer object never reaches the store.
    #[tracing::instrument(skip_all, fields(backend = self.store.backend()))]
    pub async fn submit(&self, dto: OrderDto) -> OrderResult<OrderRecord> {
        validate_order(&dto, self.mapper.id_policy())?;

        let record = self.mapper.to_record(&dto);
        let stored = self.store.create(record).await?;

        tracing::info!(
            order_id = ?stored.id,
            priority = stored.priority,
            "order stored"
        );

        Ok(stored)
    }

    /// Every stored order through the outbound mapping
    #[tracing::instrument(skip_all, fields(backend = self.store.backend()))]
    pub async fn list(&self) -> OrderResult<Vec<OrderDto>> {
        let records = self.store.list_all().await?;
        tracing::debug!(count = records.len(), "listed orders");
        Ok(records.iter().map(|r| self.mapper.to_dto(r)).collect())
    }
}
