//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the order
//! routes, health checks and request tracing.

use super::super::host::ServerHost;
use crate::server::handlers::OrderState;
use crate::server::router::build_order_routes;
use anyhow::Result;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Order routes
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let order_state = OrderState {
            service: host.service.clone(),
        };

        let mut app = Self::health_routes(host).merge(build_order_routes(order_state));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .with_state(host)
    }

    async fn health_check(State(host): State<Arc<ServerHost>>) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "orders-rs",
            "storage": host.backend(),
            "ids": host.config.ids,
        }))
    }
}
