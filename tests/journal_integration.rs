//! Integration tests for the journal-backed store.

use anchor_config::journal::open_store;
use anchor_protocol::planner::BlockDraft;
use anchor_protocol::{AnxietyLevel, AnxietyLogDraft, ReflectionDraft, TaskDraft};
use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 16).unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 16, 9, 30, 0).unwrap()
}

#[test]
fn fresh_journal_is_seeded() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path(), today(), now()).unwrap();

    assert_eq!(store.tasks().len(), 4);
    assert_eq!(store.time_blocks().len(), 3);
    assert_eq!(store.anxiety_logs().len(), 2);
    assert_eq!(store.reflections().len(), 2);
    for file in ["tasks.json", "time_blocks.json", "anxiety_logs.json", "reflections.json"] {
        assert!(dir.path().join(file).exists(), "{file} should be written");
    }
}

#[test]
fn every_collection_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(dir.path(), today(), now()).unwrap();

    let first = store.tasks()[0].id;
    store.toggle_task_complete(first).unwrap();
    store
        .add_task(TaskDraft {
            title: "Pay rent".into(),
            estimated_minutes: "10".into(),
            ..TaskDraft::default()
        })
        .unwrap()
        .unwrap();
    store
        .log_anxiety(
            AnxietyLogDraft {
                trigger: "Inbox at 200".into(),
                ..AnxietyLogDraft::default()
            },
            AnxietyLevel::clamped(6),
            now(),
        )
        .unwrap()
        .unwrap();
    store
        .save_reflection(ReflectionDraft::default(), today())
        .unwrap();

    let reopened = open_store(dir.path(), today(), now()).unwrap();
    assert!(reopened.tasks()[0].completed);
    assert_eq!(reopened.tasks().last().unwrap().title, "Pay rent");
    assert_eq!(reopened.anxiety_logs().last().unwrap().trigger, "Inbox at 200");
    assert_eq!(reopened.reflections().len(), 3);
}

#[test]
fn rejected_draft_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(dir.path(), today(), now()).unwrap();

    let draft = BlockDraft {
        end: "16:00".into(),
        ..BlockDraft::for_slot(today(), 14)
    };
    assert!(store.add_time_block(draft).unwrap().is_none());

    let reopened = open_store(dir.path(), today(), now()).unwrap();
    assert_eq!(reopened.time_blocks().len(), 3);
}

#[test]
fn corrupt_journal_fails_to_open() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("reflections.json"), "[{").unwrap();
    assert!(open_store(dir.path(), today(), now()).is_err());
}
