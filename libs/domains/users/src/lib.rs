//! Users Domain
//!
//! User records behind a small HTTP surface: list, cached lookup, profile
//! update, delete, registration with salted password hashing, login and
//! password change.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, per-route status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Id parsing, lookup cache, password hashing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Records, DTOs, pagination, schema
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers, InMemoryUserRepository, UserCache, UserService, UsersConfig,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository, UserCache::new(), UsersConfig::default());
//!
//! let router = handlers::router(service);
//! ```

pub mod cache;
pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use cache::UserCache;
pub use config::UsersConfig;
pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{
    ChangePasswordRequest, ListParams, LoginRequest, LookupSource, NewUser, Pagination,
    RegisterRequest, UpdateUser, User, UserSchema,
};
pub use postgres::PostgresUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
