//! Order record and transfer object

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Canonical persisted representation of an order
///
/// `id` is `None` only between mapping and the store assigning one; every
/// record returned by an [`OrderStore`](crate::core::store::OrderStore) has it set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: Option<i64>,
    pub customer_name: String,
    pub total_amount: f64,
    pub priority: bool,
}

impl OrderRecord {
    /// Create an unsaved record without an identifier
    pub fn new(customer_name: impl Into<String>, total_amount: f64, priority: bool) -> Self {
        Self {
            id: None,
            customer_name: customer_name.into(),
            total_amount,
            priority,
        }
    }

    /// Set a client-chosen identifier
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Wire-facing representation exchanged with clients
///
/// Every field is optional on the wire; which ones must be present depends on
/// the deployment's [`IdPolicy`] and is enforced by
/// [`validate_order`](crate::core::validation::validate_order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    #[validate(required(message = "must not be null"))]
    pub customer_name: Option<String>,

    #[serde(default)]
    #[validate(
        required(message = "must not be null"),
        range(min = 0.0, message = "must be greater than or equal to 0")
    )]
    pub total_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<bool>,
}

impl OrderDto {
    /// Build a transfer object carrying only the two always-required fields
    pub fn new(customer_name: impl Into<String>, total_amount: f64) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            total_amount: Some(total_amount),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// How order identifiers are assigned
///
/// The two policies are incompatible and chosen once per deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// The store assigns ids; any client-sent id is ignored
    #[default]
    ServerGenerated,
    /// The client must send the id (and every other field)
    ClientSupplied,
}
