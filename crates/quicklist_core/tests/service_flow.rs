use quicklist_core::db::open_db_in_memory;
use quicklist_core::{
    KeyValueStore, ListArchive, ListService, MemoryKeyValueStore, NotificationKind, Priority,
    RecordingSink, SqliteKeyValueStore, LIST_KEY,
};
use uuid::Uuid;

#[test]
fn fresh_start_add_toggle_remove_scenario() {
    let archive = ListArchive::new(MemoryKeyValueStore::new());
    let mut service = ListService::open(archive, RecordingSink::new());

    let opened = service.sink_mut().drain();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].kind, NotificationKind::Info);
    assert!(opened[0].message.contains("Starting fresh"));
    assert!(service.items().is_empty());

    let item = service.add("Buy milk", Priority::High).unwrap();
    assert_eq!(service.items().len(), 1);
    assert_eq!(item.text, "Buy milk");
    assert_eq!(item.priority, Priority::High);
    assert!(!item.completed);

    let added = service.sink_mut().drain();
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].kind, NotificationKind::Success);
    assert!(added[0].message.contains("Buy milk"));
    assert!(added[0].message.contains("high"));
    assert_eq!(added[1].kind, NotificationKind::Info);
    assert!(added[1].message.contains("saved"));

    let toggled = service.toggle_complete(item.id).unwrap();
    assert!(toggled.completed);
    assert!(service.items()[0].completed);

    let toggle_notes = service.sink_mut().drain();
    assert_eq!(toggle_notes.len(), 2);
    assert_eq!(toggle_notes[0].kind, NotificationKind::Info);
    assert!(toggle_notes[0].message.contains("complete"));

    let removed = service.remove(item.id).unwrap();
    assert_eq!(removed.id, item.id);
    assert!(service.items().is_empty());

    let remove_notes = service.sink_mut().drain();
    assert_eq!(remove_notes.len(), 2);
    assert!(remove_notes[0].message.contains("Buy milk"));
}

#[test]
fn blank_add_warns_and_does_not_save() {
    let conn = open_db_in_memory().unwrap();
    let archive = ListArchive::new(SqliteKeyValueStore::new(&conn));
    let mut service = ListService::open(archive, RecordingSink::new());
    service.sink_mut().drain();

    assert!(service.add("   ", Priority::Medium).is_err());

    let notes = service.sink_mut().drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Warning);
    assert!(service.items().is_empty());

    // The rejection must not have written anything to the slot.
    let probe = SqliteKeyValueStore::new(&conn);
    assert_eq!(probe.get(LIST_KEY).unwrap(), None);
}

#[test]
fn unknown_ids_are_silent_noops() {
    let archive = ListArchive::new(MemoryKeyValueStore::new());
    let mut service = ListService::open(archive, RecordingSink::new());
    service.add("only item", Priority::Low).unwrap();
    service.sink_mut().drain();

    assert!(service.toggle_complete(Uuid::new_v4()).is_none());
    assert!(service.remove(Uuid::new_v4()).is_none());

    assert!(service.sink_mut().drain().is_empty());
    assert_eq!(service.items().len(), 1);
}

#[test]
fn state_survives_reopen_through_the_shared_store() {
    let conn = open_db_in_memory().unwrap();

    let first_items = {
        let archive = ListArchive::new(SqliteKeyValueStore::new(&conn));
        let mut service = ListService::open(archive, RecordingSink::new());
        service.add("Buy milk", Priority::High).unwrap();
        let second = service.add("water plants", Priority::Low).unwrap();
        service.toggle_complete(second.id).unwrap();
        service.items().to_vec()
    };

    let archive = ListArchive::new(SqliteKeyValueStore::new(&conn));
    let service = ListService::open(archive, RecordingSink::new());

    let notes = service.sink().notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Info);
    assert!(notes[0].message.contains("Loaded 2"));
    assert_eq!(service.items(), first_items.as_slice());
}

#[test]
fn corrupt_slot_surfaces_an_error_and_starts_empty() {
    let conn = open_db_in_memory().unwrap();
    let mut probe = SqliteKeyValueStore::new(&conn);
    probe.put(LIST_KEY, "][ definitely not a list").unwrap();

    let archive = ListArchive::new(SqliteKeyValueStore::new(&conn));
    let service = ListService::open(archive, RecordingSink::new());

    let notes = service.sink().notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Error);
    assert!(service.items().is_empty());
}

#[test]
fn failed_save_keeps_the_in_memory_mutation() {
    let archive = ListArchive::new(MemoryKeyValueStore::with_quota(32));
    let mut service = ListService::open(archive, RecordingSink::new());
    service.sink_mut().drain();

    let item = service
        .add("a task long enough to blow the quota", Priority::Low)
        .unwrap();

    assert_eq!(service.items().len(), 1);
    assert_eq!(service.items()[0].id, item.id);

    let notes = service.sink_mut().drain();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].kind, NotificationKind::Success);
    assert_eq!(notes[1].kind, NotificationKind::Error);
    assert!(notes[1].message.contains("Failed to save"));
}
