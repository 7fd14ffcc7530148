//! KobeService: owns the store handle, the clock, and the three engines.

use std::sync::Arc;

use kobe_core::config::{KobeConfig, ScoringConfig};
use kobe_core::errors::{KobeError, KobeResult};
use kobe_core::models::{DisplayUser, LeaderboardEntry, User};
use kobe_core::traits::{IClock, ITaskStore, SystemClock};
use kobe_observability::tracing_setup::events;
use kobe_scoring::{LeaderboardEngine, ScoreReadEngine, ScoreUpdateEngine};
use kobe_storage::StorageEngine;

use crate::outcome::TaskUpdateOutcome;

/// Entry point for every user-facing operation.
///
/// The engines never call each other; this type is the only place where a
/// store read, an engine decision, and a store write are sequenced.
///
/// Operations are synchronous and may block briefly on the SQLite write
/// lock; they can be called from async runtime workers.
pub struct KobeService {
    store: Arc<dyn ITaskStore>,
    clock: Arc<dyn IClock>,
    updater: ScoreUpdateEngine,
    reader: ScoreReadEngine,
    leaderboard: LeaderboardEngine,
}

impl KobeService {
    /// Service with canonical point values.
    pub fn new(store: Arc<dyn ITaskStore>, clock: Arc<dyn IClock>) -> Self {
        Self::with_scoring(store, clock, ScoringConfig::default())
    }

    pub fn with_scoring(
        store: Arc<dyn ITaskStore>,
        clock: Arc<dyn IClock>,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            store,
            clock,
            updater: ScoreUpdateEngine::with_config(scoring),
            reader: ScoreReadEngine::new(),
            leaderboard: LeaderboardEngine::new(),
        }
    }

    /// Validate `config`, open its SQLite database, and use the wall clock.
    pub fn open(config: &KobeConfig) -> KobeResult<Self> {
        config.validate()?;
        let store = StorageEngine::open_with_config(&config.storage)?;
        Ok(Self::with_scoring(
            Arc::new(store),
            Arc::new(SystemClock),
            config.scoring.clone(),
        ))
    }

    pub fn store(&self) -> &Arc<dyn ITaskStore> {
        &self.store
    }

    pub fn scoring(&self) -> &ScoringConfig {
        self.updater.config()
    }

    /// Look up a user, creating it on first sight, and render its tasks
    /// with decayed display scores.
    pub fn fetch_or_create_user(
        &self,
        email: &str,
        display_name: &str,
        photo_url: &str,
    ) -> KobeResult<DisplayUser> {
        let now = self.clock.now();
        let span = kobe_observability::render_span!(email);
        let _guard = span.enter();

        let user = match self.store.find_user_by_email(email)? {
            Some(user) => user,
            None => {
                let user = self.store.create_user(email, display_name, photo_url, now)?;
                events::user_created(&user.email, &user.id);
                user
            }
        };
        Ok(self.reader.render_user(&user, now))
    }

    /// Append a zero-score task to the user's list.
    pub fn add_task(&self, email: &str, name: &str) -> KobeResult<User> {
        let now = self.clock.now();
        let user = self.store.append_task(email, name, now)?;
        if let Some(task) = user.tasks.last() {
            events::task_created(&user.email, &task.id, user.tasks.len());
        }
        Ok(user)
    }

    /// Record a touch on one task.
    ///
    /// A second touch on the same day is a no-op reported as
    /// [`TaskUpdateOutcome::AlreadyUpdatedToday`]. A write that loses a race
    /// with another touch fails with `ConcurrentUpdate` and changes nothing.
    pub fn update_task_score(&self, email: &str, task_id: &str) -> KobeResult<TaskUpdateOutcome> {
        let now = self.clock.now();
        let span = kobe_observability::update_span!(email, task_id);
        let _guard = span.enter();

        let user = self
            .store
            .find_user_by_email(email)?
            .ok_or_else(|| KobeError::UserNotFound {
                email: email.to_string(),
            })?;
        let update = self.updater.update_user_task(&user, task_id, now)?;

        match update.to_store_update() {
            None => {
                events::task_update_skipped(task_id, update.rule.as_str());
                Ok(TaskUpdateOutcome::AlreadyUpdatedToday)
            }
            Some(write) => {
                let user = self.store.set_task_score(email, &write)?;
                events::task_score_updated(
                    task_id,
                    update.rule.as_str(),
                    update.previous_score,
                    update.new_score,
                );
                Ok(TaskUpdateOutcome::Updated(user))
            }
        }
    }

    /// Rank every user by kobe score.
    pub fn leaderboard(&self) -> KobeResult<Vec<LeaderboardEntry>> {
        let now = self.clock.now();
        let users = self.store.list_all_users()?;
        let span = kobe_observability::leaderboard_span!(users.len());
        let _guard = span.enter();

        let entries = self.leaderboard.rank(&users, now);
        events::leaderboard_computed(
            entries.len(),
            entries.first().map(|e| e.kobe_score.as_str()),
        );
        Ok(entries)
    }
}
