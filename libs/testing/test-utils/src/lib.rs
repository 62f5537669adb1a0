//! Shared test utilities for the users workspace
//!
//! - `TestDatabase`: PostgreSQL container with the users schema applied
//! - `TestDataBuilder`: deterministic, per-test unique names and emails
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let email = builder.email("ann");
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Builder for test data seeded from the test name
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Derive the seed from the test name so every test gets its own data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Display name, e.g. `user-12345-ann`
    pub fn name(&self, suffix: &str) -> String {
        format!("user-{}-{}", self.seed, suffix)
    }

    /// Unique email address, e.g. `ann.12345@example.com`
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.com", local, self.seed)
    }
}
