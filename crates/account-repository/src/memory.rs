//! In-memory user store.

use crate::traits::UserStore;
use account_core::{AccountResult, UserRecord};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory `UserStore` backed by a `HashMap` behind one `RwLock`.
///
/// Reads share the lock and may run concurrently; every mutation takes it
/// exclusively, so concurrent requests cannot observe a half-applied
/// write. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    #[must_use]
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.user_id.clone(), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true when the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get(&self, user_id: &str) -> AccountResult<Option<UserRecord>> {
        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn insert(&self, record: UserRecord) -> AccountResult<bool> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.user_id) {
            return Ok(false);
        }
        debug!("Store: insert {}", record.user_id);
        records.insert(record.user_id.clone(), record);
        Ok(true)
    }

    async fn update(&self, record: UserRecord) -> AccountResult<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.user_id) {
            Some(existing) => {
                debug!("Store: update {}", record.user_id);
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, user_id: &str) -> AccountResult<bool> {
        debug!("Store: delete {}", user_id);
        Ok(self.records.write().await.remove(user_id).is_some())
    }

    async fn exists(&self, user_id: &str) -> AccountResult<bool> {
        Ok(self.records.read().await.contains_key(user_id))
    }
}
