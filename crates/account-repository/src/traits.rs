//! Store trait definitions.

use account_core::{AccountResult, UserRecord};
use async_trait::async_trait;

/// User store trait.
///
/// Mutating operations are atomic with respect to each other: `insert`
/// performs its duplicate check and the write under a single guard, so a
/// concurrent signup race on the same `user_id` admits exactly one winner.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the record for `user_id`, if present.
    async fn get(&self, user_id: &str) -> AccountResult<Option<UserRecord>>;

    /// Inserts a new record. Returns `false` without writing when a record
    /// with the same `user_id` already exists.
    async fn insert(&self, record: UserRecord) -> AccountResult<bool>;

    /// Replaces an existing record. Returns `false` without writing when no
    /// record with that `user_id` exists.
    async fn update(&self, record: UserRecord) -> AccountResult<bool>;

    /// Deletes the record for `user_id`. Returns `false` when absent.
    async fn delete(&self, user_id: &str) -> AccountResult<bool>;

    /// Checks whether a record with `user_id` exists.
    async fn exists(&self, user_id: &str) -> AccountResult<bool>;
}
