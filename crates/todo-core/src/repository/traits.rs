//! Repository Layer - Core Traits
//!
//! The store is a flat string-to-string map holding JSON blobs.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;
use crate::domain::StoreResult;

/// Durable key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Insert or replace the value under `key`
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> StoreResult<()>;

    /// All keys currently stored
    async fn keys(&self) -> StoreResult<Vec<String>>;
}
