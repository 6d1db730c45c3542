//! List use-case orchestration.
//!
//! # Responsibility
//! - Drive the pure list store, persist each completed mutation, and
//!   translate outcome values into notifications.
//!
//! # Invariants
//! - The startup load happens exactly once, at construction, before any
//!   mutation is possible.
//! - Exactly one save per successful mutation; no-ops never write.
//! - A failed save never rolls back the in-memory mutation.
//! - Every rejection or recovery surfaces exactly one notification.

use crate::list::ListStore;
use crate::model::item::{Item, ItemId, ItemValidationError, Priority};
use crate::notify::{Notification, NotificationSink};
use crate::repo::archive::{ListArchive, LoadOrigin};
use crate::repo::kv::KeyValueStore;
use log::{info, warn};

/// Orchestration shell over the list store and its persistence adapter.
///
/// All mutations take `&mut self`, so operations settle one at a time:
/// the save reflecting mutation N completes before mutation N+1 starts.
pub struct ListService<K: KeyValueStore, N: NotificationSink> {
    list: ListStore,
    archive: ListArchive<K>,
    sink: N,
}

impl<K: KeyValueStore, N: NotificationSink> ListService<K, N> {
    /// Opens the service by performing the one-time startup load.
    ///
    /// Corrupt or unreadable persisted data is recovered as an empty
    /// list with one notification; startup itself never fails.
    pub fn open(archive: ListArchive<K>, mut sink: N) -> Self {
        let outcome = archive.load();
        match &outcome.origin {
            LoadOrigin::Persisted { count } => {
                sink.notify(Notification::info(format!("Loaded {count} saved items.")));
            }
            LoadOrigin::NoPriorData => {
                sink.notify(Notification::info("No saved items found. Starting fresh."));
            }
            LoadOrigin::Corrupt { detail } => {
                sink.notify(Notification::error(format!(
                    "Failed to load saved items, starting fresh: {detail}"
                )));
            }
            LoadOrigin::Unavailable { detail } => {
                sink.notify(Notification::error(format!(
                    "Saved items are unavailable, starting fresh: {detail}"
                )));
            }
        }

        Self {
            list: ListStore::from_items(outcome.items),
            archive,
            sink,
        }
    }

    /// Adds an item and persists the grown list.
    ///
    /// Returns the created item. A validation rejection leaves the list
    /// unchanged, skips the save, and surfaces one warning.
    pub fn add(
        &mut self,
        text: impl AsRef<str>,
        priority: Priority,
    ) -> Result<Item, ItemValidationError> {
        match self.list.add(text, priority) {
            Ok(item) => {
                info!(
                    "event=list_add module=service status=ok id={} priority={}",
                    item.id, item.priority
                );
                self.sink.notify(Notification::success(format!(
                    "Added \"{}\" with priority \"{}\".",
                    item.text, item.priority
                )));
                self.persist();
                Ok(item)
            }
            Err(err) => {
                warn!("event=list_add module=service status=rejected error={err}");
                self.sink
                    .notify(Notification::warning("Please enter some text for the item."));
                Err(err)
            }
        }
    }

    /// Flips an item's completion state and persists the change.
    ///
    /// An unknown id is a silent no-op: no save, no notification.
    pub fn toggle_complete(&mut self, id: ItemId) -> Option<Item> {
        let item = self.list.toggle_complete(id)?;
        info!(
            "event=list_toggle module=service status=ok id={} completed={}",
            item.id, item.completed
        );
        let state = if item.completed {
            "complete"
        } else {
            "incomplete"
        };
        self.sink.notify(Notification::info(format!(
            "\"{}\" marked as {state}.",
            item.text
        )));
        self.persist();
        Some(item)
    }

    /// Removes an item and persists the shortened list.
    ///
    /// An unknown id is a silent no-op: no save, no notification.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let item = self.list.remove(id)?;
        info!("event=list_remove module=service status=ok id={}", item.id);
        self.sink
            .notify(Notification::info(format!("Deleted \"{}\".", item.text)));
        self.persist();
        Some(item)
    }

    /// Read-only view of the current list.
    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    /// The notification sink, for callers that render after the fact.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    // One whole-state save per completed mutation. The mutation already
    // settled, so a rejected write keeps the in-memory list intact.
    fn persist(&mut self) {
        match self.archive.save(self.list.items()) {
            Ok(()) => {
                self.sink.notify(Notification::info("List saved."));
            }
            Err(err) => {
                warn!("event=list_save module=service status=recovered error={err}");
                self.sink
                    .notify(Notification::error(format!("Failed to save list: {err}")));
            }
        }
    }
}
