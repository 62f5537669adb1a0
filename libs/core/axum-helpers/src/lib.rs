//! # Axum Helpers
//!
//! Shared building blocks for the users HTTP service.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, liveness/status/readiness routes, graceful shutdown
//! - **[`http`]**: Request logging middleware
//! - **[`errors`]**: JSON error body and the 404 fallback
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let routes = Router::new().merge(health_router());
//!     let router = create_router::<ApiDoc>(routes);
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod errors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router, health_router,
    run_health_checks,
};

pub use http::request_log;

pub use errors::{ErrorResponse, not_found};
