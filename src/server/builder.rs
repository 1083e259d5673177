//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::{ServiceConfig, StorageBackend};
use crate::core::mapper::OrderMapper;
use crate::core::service::OrderService;
use crate::core::store::OrderStore;
use crate::storage::InMemoryOrderStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the order HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(config)
///     .with_store(InMemoryOrderStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: ServiceConfig,
    store: Option<Arc<dyn OrderStore>>,
    mapper: Option<OrderMapper>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
            store: None,
            mapper: None,
            custom_routes: Vec::new(),
        }
    }

    /// Use the given deployment configuration
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the order store
    ///
    /// Without one, `build` falls back to an in-memory store when the
    /// configured backend is `in_memory`.
    pub fn with_store(mut self, store: impl OrderStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set a shared order store
    pub fn with_shared_store(mut self, store: Arc<dyn OrderStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the mapper derived from the configuration
    ///
    /// Use this to plug in a custom [`PriorityPolicy`](crate::core::mapper::PriorityPolicy).
    pub fn with_mapper(mut self, mapper: OrderMapper) -> Self {
        self.mapper = Some(mapper);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Connect the store named by the configuration
    ///
    /// For `postgres` this opens the pool and creates the `orders` table if
    /// it is missing.
    pub async fn with_configured_store(mut self) -> Result<Self> {
        let store: Arc<dyn OrderStore> = match self.config.storage.backend {
            StorageBackend::InMemory => Arc::new(InMemoryOrderStore::new()),
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres => {
                use crate::storage::postgres::{connect, ensure_schema};

                let pool = connect(&self.config.storage).await?;
                ensure_schema(&pool).await?;
                Arc::new(crate::storage::PostgresOrderStore::new(pool))
            }
            #[cfg(not(feature = "postgres"))]
            StorageBackend::Postgres => {
                anyhow::bail!("storage backend 'postgres' requires the `postgres` feature")
            }
        };

        tracing::info!(backend = store.backend(), "order store ready");
        self.store = Some(store);
        Ok(self)
    }

    /// Assemble the ingestion service
    pub fn build_service(&mut self) -> Result<OrderService> {
        self.config.validate()?;

        let mapper = match self.mapper.take() {
            Some(mapper) => mapper,
            None => self.config.build_mapper()?,
        };

        let store = match self.store.take() {
            Some(store) => store,
            None if self.config.storage.backend == StorageBackend::InMemory => {
                Arc::new(InMemoryOrderStore::new())
            }
            None => anyhow::bail!(
                "OrderStore is required for backend {:?}. Call .with_store() or .with_configured_store()",
                self.config.storage.backend
            ),
        };

        tracing::debug!(mapper = ?mapper, backend = store.backend(), "assembled order service");
        Ok(OrderService::new(store, mapper))
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let service = self.build_service()?;
        Ok(ServerHost::new(self.config, service))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `server.addr` from the configuration and stops on SIGTERM or
    /// Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.addr.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
