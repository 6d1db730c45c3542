//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one deterministic add/toggle/remove cycle through the core.
//! - Render notifications as plain lines for quick local sanity checks.

use quicklist_core::{
    ListArchive, ListService, MemoryKeyValueStore, Notification, NotificationSink, Priority,
};

struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn notify(&mut self, notification: Notification) {
        println!("[{}] {}", notification.kind, notification.message);
    }
}

fn main() {
    println!("quicklist_core version={}", quicklist_core::core_version());

    let archive = ListArchive::new(MemoryKeyValueStore::new());
    let mut service = ListService::open(archive, StdoutSink);

    let item = match service.add("Buy milk", Priority::High) {
        Ok(item) => item,
        Err(err) => {
            eprintln!("unexpected rejection: {err}");
            std::process::exit(1);
        }
    };

    if let Some(toggled) = service.toggle_complete(item.id) {
        println!("toggled: {} completed={}", toggled.text, toggled.completed);
    }
    if let Some(removed) = service.remove(item.id) {
        println!("removed: {}", removed.text);
    }

    println!("items remaining={}", service.items().len());
}
