use rposdesk::db::kv::SqliteStore;
use rposdesk::db::migrate::ensure_schema;
use rposdesk::store::{KvStore, MemoryStore};
use rusqlite::Connection;
use std::env;
use std::fs;

fn memory_sqlite() -> SqliteStore {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    ensure_schema(&conn).expect("create schema");
    SqliteStore::new(conn)
}

#[test]
fn test_sqlite_store_set_get_remove() {
    let store = memory_sqlite();

    assert_eq!(store.get("isClockedIn"), None);

    store.set("isClockedIn", "true");
    store.set("clockInTime", "2025-03-03T09:00:00+01:00");
    assert!(store.flag("isClockedIn"));

    // upsert
    store.set("isClockedIn", "false");
    assert!(!store.flag("isClockedIn"));

    store.remove("isClockedIn");
    assert_eq!(store.get("isClockedIn"), None);

    let entries = store.entries().unwrap();
    assert_eq!(
        entries,
        vec![(
            "clockInTime".to_string(),
            "2025-03-03T09:00:00+01:00".to_string()
        )]
    );
}

#[test]
fn test_sqlite_store_survives_reopen() {
    let mut path = env::temp_dir();
    path.push("kv_reopen_rposdesk.sqlite");
    fs::remove_file(&path).ok();
    let db = path.to_string_lossy().to_string();

    {
        let store = SqliteStore::open(&db).unwrap();
        store.set("breakType", "lunch");
    }

    let store = SqliteStore::open(&db).unwrap();
    assert_eq!(store.get("breakType").as_deref(), Some("lunch"));
}

#[test]
fn test_removing_missing_key_is_noop() {
    let store = memory_sqlite();
    store.remove("nothing");
    assert!(store.try_remove("nothing").is_ok());

    let mem = MemoryStore::new();
    mem.remove("nothing");
    assert!(mem.is_empty());
}

#[test]
fn test_flag_requires_exact_true() {
    let mem = MemoryStore::new();
    mem.set("isOnBreak", "TRUE");
    assert!(!mem.flag("isOnBreak"));
    mem.set("isOnBreak", "true");
    assert!(mem.flag("isOnBreak"));
    assert_eq!(mem.len(), 1);
}
