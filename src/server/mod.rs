//! HTTP server for the order service
//!
//! `ServerBuilder` assembles the store, mapper and ingestion service once at
//! startup and exposes them over REST.

pub mod builder;
pub mod exposure;
pub mod extract;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
pub use host::ServerHost;
