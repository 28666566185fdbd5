//! Consecutive-day review streak.
//!
//! A review that follows the previous one within the grace window extends the
//! streak; a longer gap starts a new streak at 1, since the review itself counts.

use chrono::{DateTime, Duration, Utc};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Streak {
    pub count: u32,
    pub last_review_date: Option<DateTime<Utc>>,
}

impl Streak {
    /// Records a completed review at `now`.
    ///
    /// Every review inside the grace window increments the count, including
    /// several on the same day, so `count` is the number of reviews in the
    /// current unbroken run rather than a number of calendar days.
    pub fn record_review(&mut self, now: DateTime<Utc>, grace_days: i64) {
        self.count = match self.last_review_date {
            Some(last) if now - last > Duration::days(grace_days) => 1,
            _ => self.count + 1,
        };
        self.last_review_date = Some(now);
    }
}
