//! Server infrastructure.
//!
//! - Router assembly with request logging, tracing and the OpenAPI document
//! - Liveness, status and readiness endpoints
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//!
//! let router = create_router::<ApiDoc>(api_routes.merge(health_router()));
//! create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_production_app, create_router};
pub use health::{HealthCheckFuture, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
