//! SM-2 (SuperMemo 2) interval calculation.
//!
//! Each item carries an easiness factor (EF) that moves with every review:
//! - Quality grades below the success threshold reset repetitions and bring the item back tomorrow
//! - Successful grades climb the ladder 1 day → 6 days → previous interval × EF
//! - EF is adjusted on every review, before the interval is chosen, and never drops below 1.3
//!
//! The calculation is pure: no clock, no storage, no randomness.

use super::review_item::Quality;
use crate::config::DEFAULT_SUCCESS_THRESHOLD;

pub const INITIAL_EASINESS_FACTOR: f64 = 2.5;
pub const MIN_EASINESS_FACTOR: f64 = 1.3;
/// Longest gap the calculator will schedule, roughly one hundred years.
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

/// The (interval, repetitions, easiness) triple the calculator maps over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Schedule {
    /// Days until the next review, always >= 1.
    pub interval: u32,
    /// Consecutive successful reviews since the last reset.
    pub repetitions: u32,
    pub easiness_factor: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            interval: 1,
            repetitions: 0,
            easiness_factor: INITIAL_EASINESS_FACTOR,
        }
    }
}

/// Computes the next schedule using the standard success threshold of 3.
pub fn compute(current: Schedule, quality: Quality) -> Schedule {
    compute_with_threshold(current, quality, DEFAULT_SUCCESS_THRESHOLD)
}

pub fn compute_with_threshold(
    current: Schedule,
    quality: Quality,
    success_threshold: u8,
) -> Schedule {
    let q = quality.value() as f64;
    let ease_delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
    let easiness_factor = (current.easiness_factor + ease_delta).max(MIN_EASINESS_FACTOR);

    if quality.value() < success_threshold {
        return Schedule {
            interval: 1,
            repetitions: 0,
            easiness_factor,
        };
    }

    let repetitions = current.repetitions.saturating_add(1);
    let interval = match repetitions {
        1 => 1,
        2 => 6,
        _ => (current.interval as f64 * easiness_factor)
            .round()
            .clamp(1.0, MAX_INTERVAL_DAYS as f64) as u32,
    };

    Schedule {
        interval,
        repetitions,
        easiness_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(value: u8) -> Quality {
        Quality::new(value).unwrap()
    }

    #[test]
    fn test_first_review() {
        let next = compute(Schedule::default(), q(4));
        assert_eq!(next.interval, 1);
        assert_eq!(next.repetitions, 1);
        assert!((next.easiness_factor - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_second_review() {
        let current = Schedule {
            interval: 1,
            repetitions: 1,
            easiness_factor: 2.5,
        };

        let next = compute(current, q(4));
        assert_eq!(next.interval, 6);
        assert_eq!(next.repetitions, 2);
    }

    #[test]
    fn test_third_review_multiplies_by_new_ease() {
        let current = Schedule {
            interval: 6,
            repetitions: 2,
            easiness_factor: 2.5,
        };

        // EF becomes 2.6 before the multiplication: 6 * 2.6 = 15.6
        let next = compute(current, q(5));
        assert_eq!(next.repetitions, 3);
        assert_eq!(next.interval, 16);
    }

    #[test]
    fn test_quality_below_3_resets() {
        let current = Schedule {
            interval: 10,
            repetitions: 5,
            easiness_factor: 2.5,
        };

        let next = compute(current, q(2));
        assert_eq!(next.interval, 1);
        assert_eq!(next.repetitions, 0);
        // EF should still be updated
        assert!(next.easiness_factor < 2.5);
    }

    #[test]
    fn test_ef_floor() {
        let current = Schedule {
            interval: 1,
            repetitions: 1,
            easiness_factor: 1.3,
        };

        let next = compute(current, q(0));
        assert_eq!(next.easiness_factor, MIN_EASINESS_FACTOR);
    }

    #[test]
    fn test_ease_deltas_per_quality() {
        let expected = [-0.8, -0.54, -0.32, -0.14, 0.0, 0.1];
        for (quality, delta) in expected.iter().enumerate() {
            let current = Schedule {
                easiness_factor: 2.5,
                ..Default::default()
            };
            let next = compute(current, q(quality as u8));
            assert!(
                (next.easiness_factor - (2.5 + delta)).abs() < 1e-9,
                "quality {quality}"
            );
        }
    }

    #[test]
    fn test_interval_is_capped() {
        let mut schedule = Schedule::default();
        for _ in 0..40 {
            schedule = compute(schedule, q(5));
            assert!(schedule.interval <= MAX_INTERVAL_DAYS);
        }
        assert_eq!(schedule.interval, MAX_INTERVAL_DAYS);

        let near_cap = Schedule {
            interval: MAX_INTERVAL_DAYS,
            repetitions: 10,
            easiness_factor: 3.0,
        };
        assert_eq!(compute(near_cap, q(4)).interval, MAX_INTERVAL_DAYS);
    }

    #[test]
    fn test_custom_threshold() {
        let current = Schedule {
            interval: 6,
            repetitions: 2,
            easiness_factor: 2.5,
        };

        let next = compute_with_threshold(current, q(3), 4);
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval, 1);
    }
}
