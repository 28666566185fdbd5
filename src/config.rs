//! Policy constants for scheduling and streak tracking.

use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SUCCESS_THRESHOLD: u8 = 3;
pub const DEFAULT_STREAK_GRACE_DAYS: i64 = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Lowest quality rating counted as a successful recall.
    pub success_threshold: u8,
    /// Maximum gap, in days, between two reviews that keeps a streak alive.
    pub streak_grace_days: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
            streak_grace_days: DEFAULT_STREAK_GRACE_DAYS,
        }
    }
}

impl SchedulerConfig {
    /// Reads a config from a JSON file. Absent fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SchedulerConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.success_threshold) {
            return Err(SchedulerError::InvalidConfig(format!(
                "successThreshold must be between 1 and 5, got {}",
                self.success_threshold
            )));
        }
        if self.streak_grace_days < 1 {
            return Err(SchedulerError::InvalidConfig(format!(
                "streakGraceDays must be at least 1, got {}",
                self.streak_grace_days
            )));
        }
        Ok(())
    }
}
