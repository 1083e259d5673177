//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds everything an exposure needs to serve orders: the
//! deployment configuration and the assembled ingestion service.

use crate::config::ServiceConfig;
use crate::core::service::OrderService;
use std::sync::Arc;

/// Host context containing all service state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(config, service));
/// let app = RestExposure::build_router(host, Vec::new())?;
/// ```
pub struct ServerHost {
    /// Deployment configuration
    pub config: Arc<ServiceConfig>,

    /// Ingestion service shared by every handler
    pub service: Arc<OrderService>,
}

impl ServerHost {
    pub fn new(config: ServiceConfig, service: OrderService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }

    /// Name of the storage backend behind the service
    pub fn backend(&self) -> &'static str {
        self.service.store().backend()
    }
}
