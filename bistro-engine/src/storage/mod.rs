//! Durable key-value state
//!
//! The engine only ever needs `get`/`set`/`remove` on opaque string keys with
//! JSON values. Reads that fail (missing backend, corrupt JSON, quota) degrade
//! to "no value" so pricing and availability keep working from a cold state.
//!
//! # Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `visit_record` | [`VisitRecord`](shared::models::VisitRecord) |
//! | `page_refreshes` | [`RefreshBurst`](shared::models::RefreshBurst) |
//! | `table_bookings` | `Vec<Reservation>` |
//! | `vip_status` | `bool` |
//! | `preferences` | [`Preferences`](shared::models::Preferences) |

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use thiserror::Error;

pub mod keys {
    pub const VISIT_RECORD: &str = "visit_record";
    pub const PAGE_REFRESHES: &str = "page_refreshes";
    pub const TABLE_BOOKINGS: &str = "table_bookings";
    pub const VIP_STATUS: &str = "vip_status";
    pub const PREFERENCES: &str = "preferences";
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Opaque string key-value store
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// Read and decode a JSON value, treating any failure as absent
pub fn load<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage read failed, using empty state");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Stored value is malformed, ignoring it");
            None
        }
    }
}

/// Like [`load`], falling back to `T::default()`
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    load(store, key).unwrap_or_default()
}

/// Encode and write a JSON value. Returns `false` if the write was dropped.
pub fn save<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to encode value, write dropped");
            return false;
        }
    };

    match store.set(key, &raw) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage write failed, write dropped");
            false
        }
    }
}

/// Delete a key. Returns `false` if the removal failed.
pub fn erase(store: &dyn KeyValueStore, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage remove failed");
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A store whose every operation fails, e.g. a full quota
    pub struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("quota exceeded".into()))
        }
    }
}
