//! In-memory collection of review items for one learner.
//!
//! Items keep their insertion order; every lookup is a linear scan, which is
//! plenty for a few hundred facts per learner.

use super::review_item::{FactDescriptor, Quality, ReviewItem};
use super::sm2::compute_with_threshold;
use crate::error::{Result, SchedulerError};
use chrono::{DateTime, Duration, Utc};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewItemStore {
    items: Vec<ReviewItem>,
}

impl ReviewItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing items, rejecting duplicate ids.
    pub fn from_items(items: Vec<ReviewItem>) -> Result<Self> {
        let mut store = Self::new();
        for item in items {
            if store.contains(&item.id) {
                return Err(SchedulerError::DuplicateItem(item.id));
            }
            store.items.push(item);
        }
        Ok(store)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&ReviewItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Registers a new fact with a default schedule, due at `now`.
    pub fn add(&mut self, fact: FactDescriptor, now: DateTime<Utc>) -> Result<&ReviewItem> {
        if self.contains(&fact.id) {
            return Err(SchedulerError::DuplicateItem(fact.id));
        }
        self.items.push(ReviewItem::new(fact, now));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Applies one review to the item and stamps its timestamps.
    /// Nothing is changed when the item is missing or the next review date
    /// would overflow.
    pub fn apply_review(
        &mut self,
        id: &str,
        quality: Quality,
        success_threshold: u8,
        now: DateTime<Utc>,
    ) -> Result<&ReviewItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| SchedulerError::ItemNotFound(id.to_string()))?;

        let next = compute_with_threshold(item.schedule(), quality, success_threshold);
        let next_review = now
            .checked_add_signed(Duration::days(i64::from(next.interval)))
            .ok_or_else(|| SchedulerError::ScheduleOverflow { id: id.to_string() })?;

        item.interval = next.interval;
        item.repetitions = next.repetitions;
        item.easiness_factor = next.easiness_factor;
        item.last_reviewed = Some(now);
        item.next_review = next_review;

        Ok(item)
    }

    pub fn all(&self) -> &[ReviewItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use chrono::TimeZone;

    fn fact(id: &str) -> FactDescriptor {
        FactDescriptor {
            id: id.to_string(),
            content: format!("content of {id}"),
            concept: "vocabulary".to_string(),
            module_id: "module-1".to_string(),
            difficulty: Difficulty::Medium,
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut store = ReviewItemStore::new();
        store.add(fact("a"), start()).unwrap();
        store.add(fact("b"), start()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").unwrap().content, "content of b");
        assert!(store.get("c").is_none());
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let mut store = ReviewItemStore::new();
        store.add(fact("a"), start()).unwrap();

        let result = store.add(fact("a"), start());
        assert!(matches!(result, Err(SchedulerError::DuplicateItem(id)) if id == "a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_apply_review_stamps_timestamps() {
        let mut store = ReviewItemStore::new();
        store.add(fact("a"), start()).unwrap();

        let now = start() + Duration::hours(2);
        let item = store.apply_review("a", Quality::new(5).unwrap(), 3, now).unwrap();

        assert_eq!(item.last_reviewed, Some(now));
        assert_eq!(item.next_review, now + Duration::days(1));
        assert_eq!(item.repetitions, 1);
    }

    #[test]
    fn test_apply_review_unknown_item() {
        let mut store = ReviewItemStore::new();
        store.add(fact("a"), start()).unwrap();
        let before = store.clone();

        let result = store.apply_review("missing", Quality::new(4).unwrap(), 3, start());
        assert!(matches!(result, Err(SchedulerError::ItemNotFound(_))));
        assert_eq!(store, before);
    }

    #[test]
    fn test_apply_review_past_max_date_is_an_error() {
        let mut store = ReviewItemStore::new();
        let now = DateTime::<Utc>::MAX_UTC - Duration::days(2);
        store.add(fact("a"), now).unwrap();
        store.apply_review("a", Quality::new(5).unwrap(), 3, now).unwrap();
        let before = store.clone();

        // second success schedules 6 days out, past the last representable instant
        let result = store.apply_review("a", Quality::new(5).unwrap(), 3, now);
        assert!(matches!(result, Err(SchedulerError::ScheduleOverflow { id }) if id == "a"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let items = vec![
            ReviewItem::new(fact("a"), start()),
            ReviewItem::new(fact("a"), start()),
        ];
        assert!(matches!(
            ReviewItemStore::from_items(items),
            Err(SchedulerError::DuplicateItem(_))
        ));
    }
}
