//! Domain model for the quicklist core.
//!
//! # Responsibility
//! - Define the canonical item record shared by the list store, the
//!   persistence adapter and services.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Removal is physical; there is no tombstone state.

pub mod item;
