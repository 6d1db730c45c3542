//! Durable string-keyed storage seam and its implementations.
//!
//! # Responsibility
//! - Define the key-value contract the persistence adapter writes through.
//! - Provide the SQLite-backed durable implementation and an in-memory
//!   implementation for tests and volatile sessions.
//!
//! # Invariants
//! - `put` replaces the previous value wholesale.
//! - Implementations never partially apply a write.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type KvResult<T> = Result<T, KvError>;

/// Errors surfaced by key-value store implementations.
#[derive(Debug)]
pub enum KvError {
    Db(DbError),
    QuotaExceeded { limit_bytes: usize },
}

impl Display for KvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded { limit_bytes } => {
                write!(f, "store quota of {limit_bytes} bytes exceeded")
            }
        }
    }
}

impl Error for KvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } => None,
        }
    }
}

impl From<DbError> for KvError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for KvError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Contract for the external durable store.
///
/// The adapter treats the store as an already-existing collaborator: one
/// string key maps to one string value, and a write replaces the prior
/// value in full.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> KvResult<()>;
}

/// SQLite-backed durable store over the `kv` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn put(&mut self, key: &str, value: &str) -> KvResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory store for tests and sessions that skip durability.
///
/// An optional quota caps the total bytes held, mirroring the write
/// rejection a browser-style storage facility produces when full.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the total stored bytes; a write that would exceed the cap
    /// fails with [`KvError::QuotaExceeded`] and changes nothing.
    pub fn with_quota(limit_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota_bytes: Some(limit_bytes),
        }
    }

    fn bytes_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> KvResult<()> {
        if let Some(limit_bytes) = self.quota_bytes {
            let projected = self.bytes_excluding(key) + key.len() + value.len();
            if projected > limit_bytes {
                return Err(KvError::QuotaExceeded { limit_bytes });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
