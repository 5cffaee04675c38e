use rusqlite::Connection;
use taskpad_core::db::migrations::latest_version;
use taskpad_core::db::open_db_in_memory;
use taskpad_core::{SqliteTaskStore, StoreError, TaskStore};
use uuid::Uuid;

#[test]
fn insert_and_get_all_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let created = store.insert("Buy milk", false).unwrap();
    assert_eq!(created.task_name, "Buy milk");
    assert!(!created.is_done);

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[test]
fn insert_permits_duplicate_names_with_distinct_ids() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let first = store.insert("Water plants", false).unwrap();
    let second = store.insert("Water plants", false).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(store.get_all().unwrap().len(), 2);
}

#[test]
fn insert_rejects_blank_name_and_leaves_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let empty = store.insert("", false).unwrap_err();
    assert!(matches!(empty, StoreError::Validation(_)));

    let blank = store.insert("   ", true).unwrap_err();
    assert!(matches!(blank, StoreError::Validation(_)));

    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn update_replaces_name_and_flag() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let created = store.insert("Buy milk", false).unwrap();
    store
        .update_by_id(created.id, "Buy oat milk", true)
        .unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].task_name, "Buy oat milk");
    assert!(all[0].is_done);
}

#[test]
fn update_rejects_blank_name_and_leaves_record_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let created = store.insert("Buy milk", false).unwrap();
    let err = store.update_by_id(created.id, "  ", true).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));

    let all = store.get_all().unwrap();
    assert_eq!(all[0], created);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let missing = Uuid::new_v4();
    let err = store.update_by_id(missing, "anything", false).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn toggle_twice_restores_flag_and_preserves_identity() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let created = store.insert("Buy milk", false).unwrap();

    store
        .update_by_id(created.id, &created.task_name, true)
        .unwrap();
    store
        .update_by_id(created.id, &created.task_name, false)
        .unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].task_name, created.task_name);
    assert!(!all[0].is_done);
}

#[test]
fn delete_is_final() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    let created = store.insert("Buy milk", false).unwrap();
    store.delete_by_id(created.id).unwrap();

    assert!(store
        .get_all()
        .unwrap()
        .iter()
        .all(|task| task.id != created.id));

    let err = store
        .update_by_id(created.id, "Buy milk", true)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == created.id));

    let err = store.delete_by_id(created.id).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == created.id));
}

#[test]
fn get_all_order_is_stable_across_snapshot_reads() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteTaskStore::try_new(&conn).unwrap();

    store.insert("a", false).unwrap();
    store.insert("b", false).unwrap();
    store.insert("c", true).unwrap();

    // Collapse created_at so ordering falls back to the uuid tiebreak.
    conn.execute("UPDATE tasks SET created_at = 1234567890000;", [])
        .unwrap();

    let first = store.get_all().unwrap();
    let second = store.get_all().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    match result {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_tasks_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("tasks"))
    ));
}

#[test]
fn store_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE tasks (
            uuid TEXT PRIMARY KEY NOT NULL,
            task_name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTaskStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredColumn {
            table: "tasks",
            column: "is_done"
        })
    ));
}
