//! In-memory list state and its pure transitions.
//!
//! # Responsibility
//! - Own the ordered item collection and apply atomic mutations to it.
//! - Return outcome values; persistence and notifications belong to the
//!   service layer.
//!
//! # Invariants
//! - Item ids are pairwise distinct.
//! - Insertion order is preserved; new items append at the end.
//! - A failed or no-op operation leaves the collection untouched.

use crate::model::item::{Item, ItemId, ItemValidationError, Priority};

/// Ordered collection of items with pure state transitions.
///
/// The store performs no I/O and holds no collaborators; every operation
/// returns a value describing what happened, and a successful return is
/// the caller's mutation-occurred signal.
#[derive(Debug, Default)]
pub struct ListStore {
    items: Vec<Item>,
}

impl ListStore {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from already-persisted items, preserving their order.
    ///
    /// The load path is the only expected caller; parsed records are
    /// trusted to carry pairwise distinct ids.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Appends a new item created from `text` and `priority`.
    ///
    /// Text is trimmed before validation; an empty result is rejected
    /// with [`ItemValidationError::EmptyText`] and the list stays
    /// unchanged. Returns the created item.
    pub fn add(
        &mut self,
        text: impl AsRef<str>,
        priority: Priority,
    ) -> Result<Item, ItemValidationError> {
        let item = Item::new(text, priority)?;
        self.items.push(item.clone());
        Ok(item)
    }

    /// Flips the completion flag of the item with `id`.
    ///
    /// Returns the updated item, or `None` when no such item exists; the
    /// absent case is a silent no-op, not an error. Applying the
    /// operation twice restores the original flag.
    pub fn toggle_complete(&mut self, id: ItemId) -> Option<Item> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.toggle();
        Some(item.clone())
    }

    /// Removes the item with `id`, preserving the order of the rest.
    ///
    /// Returns the removed item, or `None` when no such item exists.
    /// Removal is physical; the item ceases to exist in the list.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Read-only view of the current items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up one item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
