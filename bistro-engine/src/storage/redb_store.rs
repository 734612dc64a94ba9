//! redb-backed store
//!
//! A single `kv` table of `&str -> &str`. Commits are durable as soon as
//! `commit()` returns, so a restart of the demo keeps the visit record,
//! refresh window and bookings.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use super::{KeyValueStore, StorageResult};

const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").finish_non_exhaustive()
    }
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.remove(key)?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let store = RedbStore::open_in_memory().unwrap();
        assert_eq!(store.get("vip_status").unwrap(), None);

        store.set("vip_status", "true").unwrap();
        assert_eq!(store.get("vip_status").unwrap().as_deref(), Some("true"));

        store.remove("vip_status").unwrap();
        assert_eq!(store.get("vip_status").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bistro.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.set("visit_record", r#"{"firstVisitTime":42}"#).unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.get("visit_record").unwrap().as_deref(),
            Some(r#"{"firstVisitTime":42}"#)
        );
    }
}
