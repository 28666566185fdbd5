//! Scheduler facade: the one entry point collaborators use for a learner.
//!
//! Every mutation runs against a copy of the learner's state. The copy is
//! persisted first and only then swapped in, so a rejected rating or a failed
//! write leaves the in-memory state exactly as it was.

use crate::clock::Clock;
use crate::config::SchedulerConfig;
use crate::database::StateStore;
use crate::error::{Result, SchedulerError};
use crate::models::{FactDescriptor, Quality, ReviewItem, SchedulerState};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Reads and decodes a learner's record. A missing record is an empty state.
pub fn load_state<S: StateStore>(store: &S, learner_id: &str) -> Result<SchedulerState> {
    let Some(record) = store.load(learner_id)? else {
        return Ok(SchedulerState::default());
    };

    SchedulerState::from_json(&record).map_err(|err| SchedulerError::CorruptRecord {
        learner_id: learner_id.to_string(),
        reason: err.to_string(),
    })
}

pub struct Scheduler<S: StateStore, C: Clock> {
    learner_id: String,
    store: S,
    clock: C,
    config: SchedulerConfig,
    state: SchedulerState,
}

impl<S: StateStore, C: Clock> Scheduler<S, C> {
    /// Opens the scheduler for one learner.
    ///
    /// If the stored record cannot be read or decoded the learner starts from
    /// an empty state; the next successful write replaces the bad record.
    pub fn open(
        learner_id: impl Into<String>,
        store: S,
        clock: C,
        config: SchedulerConfig,
    ) -> Result<Self> {
        config.validate()?;
        let learner_id = learner_id.into();
        let state = load_or_empty(&store, &learner_id);

        info!(
            learner_id = %learner_id,
            items = state.items.len(),
            streak = state.streak.count,
            "scheduler opened"
        );

        Ok(Self {
            learner_id,
            store,
            clock,
            config,
            state,
        })
    }

    /// Registers a new fact, due immediately.
    pub fn register_fact(&mut self, fact: FactDescriptor) -> Result<ReviewItem> {
        let now = self.clock.now();
        let mut next = self.state.clone();
        let item = next.register(fact, now)?.clone();

        self.commit(next)?;
        debug!(learner_id = %self.learner_id, item_id = %item.id, "fact registered");
        Ok(item)
    }

    /// Records a quality rating (0-5) for an item and returns the updated item.
    pub fn submit_rating(&mut self, id: &str, quality: u8) -> Result<ReviewItem> {
        let quality = Quality::new(quality)?;
        let now = self.clock.now();
        let mut next = self.state.clone();
        let item = next.review(id, quality, &self.config, now)?.clone();

        self.commit(next)?;
        debug!(
            learner_id = %self.learner_id,
            item_id = %item.id,
            quality = quality.value(),
            interval = item.interval,
            repetitions = item.repetitions,
            streak = self.state.streak.count,
            "review recorded"
        );
        Ok(item)
    }

    pub fn due_items(&self) -> Vec<&ReviewItem> {
        self.state.due_items(self.clock.now())
    }

    pub fn due_items_at(&self, now: DateTime<Utc>) -> Vec<&ReviewItem> {
        self.state.due_items(now)
    }

    pub fn due_count(&self) -> usize {
        self.state.due_count(self.clock.now())
    }

    /// Streak as of the last completed review.
    pub fn current_streak(&self) -> u32 {
        self.state.streak.count
    }

    pub fn last_review_date(&self) -> Option<DateTime<Utc>> {
        self.state.streak.last_review_date
    }

    pub fn items(&self) -> &[ReviewItem] {
        self.state.items.all()
    }

    pub fn item(&self, id: &str) -> Option<&ReviewItem> {
        self.state.items.get(id)
    }

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn learner_id(&self) -> &str {
        &self.learner_id
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Discards in-memory state and reads the learner's record again.
    pub fn reload(&mut self) {
        self.state = load_or_empty(&self.store, &self.learner_id);
    }

    /// Replaces the learner's whole state, e.g. from an exported file.
    pub fn import_state(&mut self, state: SchedulerState) -> Result<()> {
        self.commit(state)?;
        info!(
            learner_id = %self.learner_id,
            items = self.state.items.len(),
            "state imported"
        );
        Ok(())
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn commit(&mut self, next: SchedulerState) -> Result<()> {
        let record = next.to_json()?;
        if let Err(err) = self.store.save(&self.learner_id, &record) {
            warn!(learner_id = %self.learner_id, error = %err, "failed to persist scheduler state");
            return Err(err.into());
        }
        self.state = next;
        Ok(())
    }
}

fn load_or_empty<S: StateStore>(store: &S, learner_id: &str) -> SchedulerState {
    match load_state(store, learner_id) {
        Ok(state) => state,
        Err(err) => {
            warn!(learner_id = %learner_id, error = %err, "could not load scheduler state, starting empty");
            SchedulerState::default()
        }
    }
}
