use chrono::{DateTime, Duration, TimeZone, Utc};
use kobe_core::models::{Task, User};
use kobe_scoring::leaderboard::positions::assign_positions;
use kobe_scoring::{LeaderboardEngine, ScoreReadEngine, ScoreUpdateEngine};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn make_task(score: i64, created_minutes: i64, updated_minutes: Option<i64>) -> Task {
    let created = epoch() + Duration::minutes(created_minutes);
    Task {
        id: uuid::Uuid::new_v4().to_string(),
        name: "p".to_string(),
        date_created: created,
        last_updated: updated_minutes.map(|m| created + Duration::minutes(m)),
        score,
    }
}

proptest! {
    #[test]
    fn same_day_repeat_never_applies(
        score in 0i64..500,
        created in 0i64..10_000,
        gap in 0i64..20_000,
        later in 0i64..1_439,
    ) {
        let engine = ScoreUpdateEngine::new();
        let task = make_task(score, created, Some(gap));
        let last = task.last_updated.unwrap();
        let update = engine.update_task(&task, last + Duration::minutes(later)).unwrap();
        prop_assert!(!update.applied);
        prop_assert_eq!(update.new_score, score);
        prop_assert_eq!(update.new_last_updated, last);
    }

    #[test]
    fn applied_updates_only_grow_and_move_forward(
        score in 0i64..500,
        created in 0i64..10_000,
        gap in 0i64..20_000,
        elapsed_days in 1i64..60,
    ) {
        let engine = ScoreUpdateEngine::new();
        let task = make_task(score, created, Some(gap));
        let now = task.last_updated.unwrap() + Duration::days(elapsed_days);
        let update = engine.update_task(&task, now).unwrap();
        prop_assert!(update.applied);
        prop_assert!(update.new_score - score >= 5 && update.new_score - score <= 7);
        prop_assert!(update.new_last_updated >= task.last_updated.unwrap());
    }

    #[test]
    fn caught_up_always_adds_exactly_five(days in 1i64..365) {
        let engine = ScoreUpdateEngine::new();
        let task = make_task(days * 5, 0, Some(0));
        let update = engine.update_task(&task, epoch() + Duration::days(days)).unwrap();
        prop_assert_eq!(update.new_score, days * 5 + 5);
    }

    #[test]
    fn render_is_referentially_transparent(
        scores in proptest::collection::vec(0i64..200, 0..12),
        offset in 0i64..100_000,
    ) {
        let engine = ScoreReadEngine::new();
        let tasks: Vec<Task> = scores.iter().map(|&s| make_task(s, 0, None)).collect();
        let before = tasks.clone();
        let now = epoch() + Duration::minutes(offset);
        let first = engine.render_tasks(&tasks, now);
        let second = engine.render_tasks(&tasks, now);
        prop_assert_eq!(&tasks, &before);
        prop_assert_eq!(&first, &second);
        for (display, task) in first.iter().zip(&tasks) {
            prop_assert!(display.score <= task.score as f64);
            prop_assert!(display.score >= 0.0);
        }
    }

    #[test]
    fn positions_start_at_one_and_never_exceed_index(
        mut scores in proptest::collection::vec(0u32..5, 1..30),
    ) {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        let formatted: Vec<String> = scores.iter().map(|s| format!("{s}.00")).collect();
        let positions = assign_positions(formatted.iter().map(String::as_str));
        prop_assert_eq!(positions[0], 1);
        for (i, &p) in positions.iter().enumerate() {
            prop_assert!(p as usize <= i + 1);
            if i > 0 {
                prop_assert!(p >= positions[i - 1]);
            }
        }
    }

    #[test]
    fn ranked_scores_are_descending(
        user_scores in proptest::collection::vec(proptest::collection::vec((0i64..100, 0i64..20), 0..4), 0..10),
    ) {
        let now = epoch() + Duration::days(30);
        let users: Vec<User> = user_scores
            .iter()
            .enumerate()
            .map(|(i, tasks)| {
                let mut user = User::new(format!("u{i}@example.com"), format!("U{i}"), "", epoch());
                user.tasks = tasks
                    .iter()
                    .map(|&(score, age)| make_task(score, (30 - age) * 1_440, None))
                    .collect();
                user
            })
            .collect();
        let board = LeaderboardEngine::new().rank(&users, now);
        prop_assert_eq!(board.len(), users.len());
        let numeric: Vec<f64> = board.iter().map(|e| e.kobe_score.parse().unwrap()).collect();
        for pair in numeric.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}
