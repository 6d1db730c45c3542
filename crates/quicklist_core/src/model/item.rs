//! Item domain model.
//!
//! # Responsibility
//! - Define the single list-entry record and its priority classification.
//! - Validate caller-supplied text before an item can exist.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `text` is non-empty after trimming and immutable once created.
//! - A persisted record without `priority` deserializes to `Priority::Low`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every list item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// Urgency classification for a list item.
///
/// Serialized lowercase on the wire. Records written before the field
/// existed carry no priority at all and deserialize to [`Priority::Low`]
/// through the `#[serde(default)]` on [`Item::priority`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Wire/display name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection reasons for caller-supplied item input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemValidationError {
    /// The text was empty after trimming surrounding whitespace.
    EmptyText,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "item text is empty after trimming"),
        }
    }
}

impl Error for ItemValidationError {}

/// One list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable id assigned at creation, never reused.
    pub id: ItemId,
    /// Display text, trimmed at creation and immutable afterwards.
    pub text: String,
    /// Completion flag, toggled by the list store.
    pub completed: bool,
    /// Urgency, fixed at creation. Absent in pre-priority records.
    #[serde(default)]
    pub priority: Priority,
}

impl Item {
    /// Creates a new incomplete item with a generated stable id.
    ///
    /// Generated v4 ids keep two items created in the same clock tick
    /// distinct, which a raw timestamp id cannot guarantee.
    pub fn new(text: impl AsRef<str>, priority: Priority) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), text, priority)
    }

    /// Creates an item with a caller-provided stable id.
    ///
    /// Trims surrounding whitespace and rejects text that is empty after
    /// trimming; no item exists on rejection.
    pub fn with_id(
        id: ItemId,
        text: impl AsRef<str>,
        priority: Priority,
    ) -> Result<Self, ItemValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::EmptyText);
        }

        Ok(Self {
            id,
            text: trimmed.to_string(),
            completed: false,
            priority,
        })
    }

    /// Flips the completion flag in place.
    ///
    /// Toggling is symmetric; applying it twice restores the prior state.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
