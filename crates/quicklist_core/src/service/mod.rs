//! Core use-case services.
//!
//! # Responsibility
//! - Compose the pure list store with persistence and notifications.
//! - Keep presentation layers decoupled from storage details.

pub mod list_service;

pub use list_service::ListService;
