//! Per-learner aggregate and its persisted record format.
//!
//! Record layout (JSON, timestamps as RFC 3339 strings):
//! ```json
//! { "items": [ { "id": "...", "nextReview": "2024-01-15T12:00:00Z", ... } ],
//!   "streakCount": 3,
//!   "lastReviewDate": "2024-01-15T12:00:00Z" }
//! ```
//! The due set is never stored; it is derived from `items` and the clock.

use super::due;
use super::item_store::ReviewItemStore;
use super::review_item::{FactDescriptor, Quality, ReviewItem};
use super::streak::Streak;
use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchedulerState {
    pub items: ReviewItemStore,
    pub streak: Streak,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateRecord {
    items: Vec<ReviewItem>,
    #[serde(default)]
    streak_count: u32,
    #[serde(default)]
    last_review_date: Option<DateTime<Utc>>,
}

impl SchedulerState {
    pub fn register(&mut self, fact: FactDescriptor, now: DateTime<Utc>) -> Result<&ReviewItem> {
        self.items.add(fact, now)
    }

    /// Runs one full review: schedule update on the item, then the streak.
    pub fn review(
        &mut self,
        id: &str,
        quality: Quality,
        config: &SchedulerConfig,
        now: DateTime<Utc>,
    ) -> Result<&ReviewItem> {
        self.items.apply_review(id, quality, config.success_threshold, now)?;
        self.streak.record_review(now, config.streak_grace_days);
        self.items
            .get(id)
            .ok_or_else(|| SchedulerError::ItemNotFound(id.to_string()))
    }

    pub fn due_items(&self, now: DateTime<Utc>) -> Vec<&ReviewItem> {
        due::due_items(self.items.all(), now)
    }

    pub fn due_count(&self, now: DateTime<Utc>) -> usize {
        due::due_count(self.items.all(), now)
    }

    fn record(&self) -> StateRecord {
        StateRecord {
            items: self.items.all().to_vec(),
            streak_count: self.streak.count,
            last_review_date: self.streak.last_review_date,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.record())?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.record())?)
    }

    /// Parses a record. Bad JSON or unparseable timestamps surface as
    /// `Json` errors, duplicate ids as `DuplicateItem`.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: StateRecord = serde_json::from_str(json)?;
        Ok(Self {
            items: ReviewItemStore::from_items(record.items)?,
            streak: Streak {
                count: record.streak_count,
                last_review_date: record.last_review_date,
            },
        })
    }
}
