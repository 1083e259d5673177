//! Router builder for order routes

use crate::server::handlers::{OrderState, create_order, list_orders};
use axum::{Router, routing::get};

/// Build order routes
///
/// - POST /orders - Submit an order (empty body on success)
/// - GET /orders - List stored orders
pub fn build_order_routes(state: OrderState) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .with_state(state)
}
