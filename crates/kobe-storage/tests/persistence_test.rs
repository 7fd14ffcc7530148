//! File-backed storage: data survives reopen, reads go through the read pool.

use chrono::{Duration, TimeZone, Utc};
use kobe_core::config::StorageConfig;
use kobe_core::models::TaskScoreUpdate;
use kobe_core::traits::ITaskStore;
use kobe_storage::pool::pragmas::verify_wal_mode;
use kobe_storage::StorageEngine;

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kobe.db");
    let t0 = Utc.with_ymd_and_hms(2024, 4, 2, 8, 0, 0).unwrap();

    let task_id = {
        let store = StorageEngine::open(&path).unwrap();
        store.create_user("ada@example.com", "Ada", "a.png", t0).unwrap();
        let user = store.append_task("ada@example.com", "read", t0).unwrap();
        let task_id = user.tasks[0].id.clone();
        store
            .set_task_score(
                "ada@example.com",
                &TaskScoreUpdate {
                    task_id: task_id.clone(),
                    expected_last_updated: None,
                    new_score: 7,
                    new_last_updated: t0 + Duration::days(1),
                },
            )
            .unwrap();
        task_id
    };

    let store = StorageEngine::open(&path).unwrap();
    let user = store.find_user_by_email("ada@example.com").unwrap().unwrap();
    assert_eq!(user.tasks.len(), 1);
    assert_eq!(user.tasks[0].id, task_id);
    assert_eq!(user.tasks[0].score, 7);
    assert_eq!(user.tasks[0].last_updated, Some(t0 + Duration::days(1)));
}

#[test]
fn readers_see_committed_writes() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("kobe.db").display().to_string(),
        read_pool_size: 3,
        ..StorageConfig::default()
    };
    let store = StorageEngine::open_with_config(&config).unwrap();
    assert_eq!(store.pool().readers.as_ref().unwrap().size(), 3);

    let now = Utc::now();
    store.create_user("ada@example.com", "Ada", "a.png", now).unwrap();
    store.append_task("ada@example.com", "read", now).unwrap();

    // Round-robin through every reader.
    for _ in 0..3 {
        let user = store.find_user_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(user.tasks.len(), 1);
    }
    assert_eq!(store.list_all_users().unwrap().len(), 1);
}

#[test]
fn file_database_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let store = StorageEngine::open(&dir.path().join("kobe.db")).unwrap();
    let wal = store
        .pool()
        .writer
        .with_conn(verify_wal_mode)
        .unwrap();
    assert!(wal);
}

#[test]
fn read_pool_size_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("kobe.db").display().to_string(),
        read_pool_size: 64,
        ..StorageConfig::default()
    };
    let store = StorageEngine::open_with_config(&config).unwrap();
    assert_eq!(store.pool().readers.as_ref().unwrap().size(), 8);
}

#[test]
fn in_memory_store_opens_no_readers() {
    let store = StorageEngine::open_in_memory().unwrap();
    assert!(store.pool().readers.is_none());
    store.create_user("ada@example.com", "Ada", "a.png", Utc::now()).unwrap();
    assert!(store.find_user_by_email("ada@example.com").unwrap().is_some());
}
