use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::User;

/// Process-local memo of single-user lookups, keyed by the raw path id.
///
/// Absent users are cached too (`Some(None)`). Entries never expire and are
/// not invalidated by writes, so a hit may be stale. Lookup and insert are
/// separate operations: concurrent misses on one key both reach the store
/// and the last insert wins.
#[derive(Debug, Clone, Default)]
pub struct UserCache {
    entries: Arc<RwLock<HashMap<String, Option<User>>>>,
}

impl UserCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` on a miss, `Some(cached)` on a hit.
    pub async fn get(&self, key: &str) -> Option<Option<User>> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn insert(&self, key: impl Into<String>, value: Option<User>) {
        self.entries.write().await.insert(key.into(), value);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
