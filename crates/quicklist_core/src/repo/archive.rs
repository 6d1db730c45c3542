//! Persistence adapter between the list state and the durable store.
//!
//! # Responsibility
//! - Serialize the full list into one fixed key-value slot on save.
//! - Restore it once at startup, recovering to an empty list on bad data.
//!
//! # Invariants
//! - Saves replace the slot wholesale; there are no delta writes.
//! - `load` never fails hard: every failure mode maps to an empty list
//!   plus a recovery signal the caller can surface.

use crate::model::item::Item;
use crate::repo::kv::{KeyValueStore, KvError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed slot holding the entire serialized list.
pub const LIST_KEY: &str = "quicklist.items";

pub type PersistResult<T> = Result<T, PersistError>;

/// Errors surfaced by the save path.
///
/// Both variants are recoverable: the in-memory list that triggered the
/// save is already mutated and stays that way.
#[derive(Debug)]
pub enum PersistError {
    Serialize(serde_json::Error),
    Store(KvError),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize list: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<KvError> for PersistError {
    fn from(value: KvError) -> Self {
        Self::Store(value)
    }
}

/// Where the loaded list came from, including recovery signals.
#[derive(Debug)]
pub enum LoadOrigin {
    /// The slot held a well-formed list.
    Persisted { count: usize },
    /// The slot was empty. A fresh start, not an error.
    NoPriorData,
    /// The slot held malformed data; recovered with an empty list.
    Corrupt { detail: String },
    /// The store could not be read; recovered with an empty list.
    Unavailable { detail: String },
}

/// Result of the one-time startup load.
#[derive(Debug)]
pub struct LoadOutcome {
    pub items: Vec<Item>,
    pub origin: LoadOrigin,
}

/// Bridges the list state to one slot of a [`KeyValueStore`].
pub struct ListArchive<K: KeyValueStore> {
    store: K,
}

impl<K: KeyValueStore> ListArchive<K> {
    /// Creates an archive over [`LIST_KEY`] in the given store.
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// Reads the slot once at startup.
    ///
    /// Records written before `priority` existed deserialize with
    /// `Priority::Low`; everything else round-trips losslessly.
    pub fn load(&self) -> LoadOutcome {
        let raw = match self.store.get(LIST_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("event=list_load module=archive status=recovered error_code=store_unreadable error={err}");
                return LoadOutcome {
                    items: Vec::new(),
                    origin: LoadOrigin::Unavailable {
                        detail: err.to_string(),
                    },
                };
            }
        };

        let raw = match raw {
            Some(raw) => raw,
            None => {
                info!("event=list_load module=archive status=ok source=empty");
                return LoadOutcome {
                    items: Vec::new(),
                    origin: LoadOrigin::NoPriorData,
                };
            }
        };

        match serde_json::from_str::<Vec<Item>>(&raw) {
            Ok(items) => {
                info!(
                    "event=list_load module=archive status=ok source=persisted count={}",
                    items.len()
                );
                LoadOutcome {
                    origin: LoadOrigin::Persisted { count: items.len() },
                    items,
                }
            }
            Err(err) => {
                warn!("event=list_load module=archive status=recovered error_code=parse_failed error={err}");
                LoadOutcome {
                    items: Vec::new(),
                    origin: LoadOrigin::Corrupt {
                        detail: err.to_string(),
                    },
                }
            }
        }
    }

    /// Replaces the slot with the full current list.
    pub fn save(&mut self, items: &[Item]) -> PersistResult<()> {
        let serialized = serde_json::to_string(items)?;
        self.store.put(LIST_KEY, &serialized)?;
        Ok(())
    }
}
