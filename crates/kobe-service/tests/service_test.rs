//! Integration test: KobeService over an in-memory store with a pinned clock.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use kobe_core::config::ScoringConfig;
use kobe_core::traits::{FixedClock, ITaskStore};
use kobe_core::KobeError;
use kobe_service::{KobeService, TaskUpdateOutcome};
use kobe_storage::StorageEngine;

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 2, 8, 30, 0).unwrap()
}

fn service() -> (KobeService, Arc<FixedClock>) {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let clock = Arc::new(FixedClock::new(t0()));
    (KobeService::new(store, clock.clone()), clock)
}

fn score_of(outcome: TaskUpdateOutcome) -> i64 {
    match outcome {
        TaskUpdateOutcome::Updated(user) => user.tasks[0].score,
        TaskUpdateOutcome::AlreadyUpdatedToday => panic!("expected an applied update"),
    }
}

#[test]
fn fetch_creates_once() {
    let (svc, clock) = service();
    let first = svc
        .fetch_or_create_user("ada@example.com", "Ada Lovelace", "ada.png")
        .unwrap();
    assert!(first.tasks.is_empty());
    assert_eq!(first.date_created, t0());

    clock.advance(Duration::days(3));
    let second = svc
        .fetch_or_create_user("ada@example.com", "Someone Else", "other.png")
        .unwrap();
    assert_eq!(second.id, first.id);
    assert_eq!(second.display_name, "Ada Lovelace");
    assert_eq!(second.date_created, t0());
}

#[test]
fn daily_streak_accumulates() {
    let (svc, clock) = service();
    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let user = svc.add_task("ada@example.com", "read").unwrap();
    let task_id = user.tasks[0].id.clone();
    assert_eq!(user.tasks[0].score, 0);

    assert_eq!(score_of(svc.update_task_score("ada@example.com", &task_id).unwrap()), 5);
    assert_eq!(
        svc.update_task_score("ada@example.com", &task_id).unwrap(),
        TaskUpdateOutcome::AlreadyUpdatedToday
    );

    clock.advance(Duration::days(1));
    assert_eq!(score_of(svc.update_task_score("ada@example.com", &task_id).unwrap()), 10);
    clock.advance(Duration::days(1));
    assert_eq!(score_of(svc.update_task_score("ada@example.com", &task_id).unwrap()), 15);

    // Three idle days: behind the maximum, so the catch-up bonus applies.
    clock.advance(Duration::days(3));
    assert_eq!(score_of(svc.update_task_score("ada@example.com", &task_id).unwrap()), 21);
}

#[test]
fn late_first_touch_scores_seven() {
    let (svc, clock) = service();
    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let task_id = svc.add_task("ada@example.com", "read").unwrap().tasks[0].id.clone();

    clock.advance(Duration::days(2));
    let outcome = svc.update_task_score("ada@example.com", &task_id).unwrap();
    assert!(outcome.is_updated());
    assert_eq!(score_of(outcome), 7);
}

#[test]
fn skipped_update_writes_nothing() {
    let (svc, _clock) = service();
    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let task_id = svc.add_task("ada@example.com", "read").unwrap().tasks[0].id.clone();
    svc.update_task_score("ada@example.com", &task_id).unwrap();

    let before = svc.store().find_user_by_email("ada@example.com").unwrap().unwrap();
    svc.update_task_score("ada@example.com", &task_id).unwrap();
    let after = svc.store().find_user_by_email("ada@example.com").unwrap().unwrap();
    assert_eq!(before, after);
}

#[test]
fn display_scores_decay_with_age() {
    let (svc, clock) = service();
    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let user = svc.add_task("ada@example.com", "read").unwrap();
    let task_id = user.tasks[0].id.clone();
    svc.add_task("ada@example.com", "untouched").unwrap();

    svc.update_task_score("ada@example.com", &task_id).unwrap();
    let today = svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    assert_eq!(today.tasks[0].score, 5.0);
    assert!(today.tasks[0].updated_today);
    assert_eq!(today.tasks[1].score, 0.0);
    assert!(!today.tasks[1].updated_today);

    clock.advance(Duration::days(1));
    svc.update_task_score("ada@example.com", &task_id).unwrap();
    let tomorrow = svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    assert_eq!(tomorrow.tasks[0].score, 5.0);
    assert!(!tomorrow.tasks[0].updated_today);
    assert_eq!(tomorrow.tasks[1].name, "untouched");

    // Rendering never writes back.
    let stored = svc.store().find_user_by_email("ada@example.com").unwrap().unwrap();
    assert_eq!(stored.tasks[0].score, 10);
}

#[test]
fn leaderboard_carries_positions_forward() {
    let (svc, clock) = service();
    let mut task_ids = Vec::new();
    for (email, name) in [
        ("ada@example.com", "Ada Lovelace"),
        ("alan@example.com", "Alan Turing"),
    ] {
        svc.fetch_or_create_user(email, name, "p.png").unwrap();
        let task_id = svc.add_task(email, "read").unwrap().tasks[0].id.clone();
        svc.update_task_score(email, &task_id).unwrap();
        task_ids.push((email, task_id));
    }
    svc.fetch_or_create_user("grace@example.com", "Grace Hopper", "g.png").unwrap();

    clock.advance(Duration::days(1));
    for (email, task_id) in &task_ids {
        svc.update_task_score(email, task_id).unwrap();
    }

    let board = svc.leaderboard().unwrap();
    let rows: Vec<(&str, &str, u32)> = board
        .iter()
        .map(|e| (e.name.as_str(), e.kobe_score.as_str(), e.position))
        .collect();
    assert_eq!(
        rows,
        vec![("Ada", "5.00", 1), ("Alan", "5.00", 1), ("Grace", "0", 3)]
    );
    assert_eq!(board[0].email, "ada@example.com");
}

#[test]
fn empty_leaderboard() {
    let (svc, _clock) = service();
    assert!(svc.leaderboard().unwrap().is_empty());
}

#[test]
fn unknown_user_and_task_are_not_found() {
    let (svc, _clock) = service();
    let err = svc.update_task_score("nobody@example.com", "t").unwrap_err();
    assert!(matches!(err, KobeError::UserNotFound { .. }));
    assert!(err.is_not_found());

    let err = svc.add_task("nobody@example.com", "read").unwrap_err();
    assert!(matches!(err, KobeError::UserNotFound { .. }));

    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let err = svc.update_task_score("ada@example.com", "missing").unwrap_err();
    assert!(matches!(err, KobeError::TaskNotFound { .. }));
}

#[test]
fn clock_before_last_update_is_invalid_state() {
    let (svc, clock) = service();
    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let task_id = svc.add_task("ada@example.com", "read").unwrap().tasks[0].id.clone();
    clock.advance(Duration::days(2));
    svc.update_task_score("ada@example.com", &task_id).unwrap();

    clock.set(t0() + Duration::days(1));
    let err = svc.update_task_score("ada@example.com", &task_id).unwrap_err();
    assert!(matches!(err, KobeError::InvalidState { .. }));
}

#[test]
fn custom_points_flow_through() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let clock = Arc::new(FixedClock::new(t0()));
    let scoring = ScoringConfig {
        daily_points: 2,
        ..ScoringConfig::default()
    };
    let svc = KobeService::with_scoring(store, clock, scoring);
    assert_eq!(svc.scoring().daily_points, 2);

    svc.fetch_or_create_user("ada@example.com", "Ada", "a.png").unwrap();
    let task_id = svc.add_task("ada@example.com", "read").unwrap().tasks[0].id.clone();
    assert_eq!(score_of(svc.update_task_score("ada@example.com", &task_id).unwrap()), 2);
}
