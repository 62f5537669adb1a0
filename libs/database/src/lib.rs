//! PostgreSQL connectivity for the users service
//!
//! Provides pool configuration loaded from the environment, connection with
//! retry and backoff, a migration runner and a health probe.
//!
//! ```ignore
//! use database::common::RetryConfig;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let policy = RetryConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, Some(policy)).await?;
//! postgres::run_migrations::<Migrator>(&db, "users_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
