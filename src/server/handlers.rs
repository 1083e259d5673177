//! HTTP handlers for order operations

use crate::core::error::OrderResult;
use crate::core::order::OrderDto;
use crate::core::service::OrderService;
use crate::server::extract::OrderPayload;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct OrderState {
    pub service: Arc<OrderService>,
}

/// Submit a new order
///
/// Responds `200 OK` with no body; failures carry an `ErrorResponse`.
pub async fn create_order(
    State(state): State<OrderState>,
    OrderPayload(dto): OrderPayload,
) -> OrderResult<StatusCode> {
    state.service.submit(dto).await?;
    Ok(StatusCode::OK)
}

/// List every stored order (priority is never included)
pub async fn list_orders(State(state): State<OrderState>) -> OrderResult<Json<Vec<OrderDto>>> {
    Ok(Json(state.service.list().await?))
}
