//! Field-by-field conversion between [`OrderDto`] and [`OrderRecord`]

use crate::core::order::{IdPolicy, OrderDto, OrderRecord};
use std::fmt;
use std::sync::Arc;

/// Derives the priority flag of a server-generated order from its total
pub trait PriorityPolicy: Send + Sync {
    /// Short identifier used in logs and configuration
    fn name(&self) -> &'static str;

    fn is_priority(&self, total_amount: f64) -> bool;
}

/// Never marks an order as priority
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPriority;

impl PriorityPolicy for NoPriority {
    fn name(&self) -> &'static str {
        "none"
    }

    fn is_priority(&self, _total_amount: f64) -> bool {
        false
    }
}

/// Marks orders whose total reaches `threshold`
#[derive(Debug, Clone, Copy)]
pub struct AmountThreshold {
    pub threshold: f64,
}

impl AmountThreshold {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl PriorityPolicy for AmountThreshold {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn is_priority(&self, total_amount: f64) -> bool {
        total_amount >= self.threshold
    }
}

/// Pure conversions between the wire shape and the persisted shape
///
/// Inbound, a server-generated deployment drops the client's `id` and
/// `priority` and derives the flag from the total; a client-supplied one
/// copies both. Outbound, `priority` is never populated.
#[derive(Clone)]
pub struct OrderMapper {
    ids: IdPolicy,
    priority: Arc<dyn PriorityPolicy>,
}

impl OrderMapper {
    pub fn new(ids: IdPolicy, priority: Arc<dyn PriorityPolicy>) -> Self {
        Self { ids, priority }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.ids
    }

    pub fn priority_policy(&self) -> &dyn PriorityPolicy {
        self.priority.as_ref()
    }

    /// Transfer object to record
    ///
    /// Expects a validated transfer object; absent values fall back to their
    /// type defaults rather than failing.
    pub fn to_record(&self, dto: &OrderDto) -> OrderRecord {
        let total_amount = dto.total_amount.unwrap_or_default();

        let (id, priority) = match self.ids {
            IdPolicy::ServerGenerated => (None, self.priority.is_priority(total_amount)),
            IdPolicy::ClientSupplied => (dto.id, dto.priority.unwrap_or_default()),
        };

        OrderRecord {
            id,
            customer_name: dto.customer_name.clone().unwrap_or_default(),
            total_amount,
            priority,
        }
    }

    /// Record to transfer object
    pub fn to_dto(&self, record: &OrderRecord) -> OrderDto {
        OrderDto {
            id: record.id,
            customer_name: Some(record.customer_name.clone()),
            total_amount: Some(record.total_amount),
            priority: None,
        }
    }
}

impl Default for OrderMapper {
    fn default() -> Self {
        Self::new(IdPolicy::default(), Arc::new(NoPriority))
    }
}

impl fmt::Debug for OrderMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderMapper")
            .field("ids", &self.ids)
            .field("priority", &self.priority.name())
            .finish()
    }
}
