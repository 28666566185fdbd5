//! A single fact under spaced review, together with its scheduling state.
use super::sm2::{INITIAL_EASINESS_FACTOR, Schedule};
use crate::error::{Result, SchedulerError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller-assigned difficulty label. Informational only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Learner's self-reported recall performance, 0 (blackout) to 5 (perfect).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX {
            return Err(SchedulerError::InvalidQuality(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Quality {
    type Error = SchedulerError;

    fn try_from(value: u8) -> Result<Self> {
        Quality::new(value)
    }
}

/// Everything a collaborator supplies when registering a fact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactDescriptor {
    pub id: String,
    pub content: String,
    pub concept: String,
    pub module_id: String,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: String,
    pub content: String,
    pub concept: String,
    pub module_id: String,
    pub difficulty: Difficulty,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub next_review: DateTime<Utc>,
    pub interval: u32,
    pub repetitions: u32,
    pub easiness_factor: f64,
}

impl ReviewItem {
    /// Creates a never-reviewed item that is due immediately.
    pub fn new(fact: FactDescriptor, now: DateTime<Utc>) -> Self {
        Self {
            id: fact.id,
            content: fact.content,
            concept: fact.concept,
            module_id: fact.module_id,
            difficulty: fact.difficulty,
            last_reviewed: None,
            next_review: now,
            interval: 1,
            repetitions: 0,
            easiness_factor: INITIAL_EASINESS_FACTOR,
        }
    }

    pub fn schedule(&self) -> Schedule {
        Schedule {
            interval: self.interval,
            repetitions: self.repetitions,
            easiness_factor: self.easiness_factor,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }
}
