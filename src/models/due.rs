//! Selection of items whose next review time has arrived.
use super::review_item::ReviewItem;
use chrono::{DateTime, Utc};

/// Returns the items with `next_review <= now`, in collection order.
pub fn due_items(items: &[ReviewItem], now: DateTime<Utc>) -> Vec<&ReviewItem> {
    items.iter().filter(|item| item.is_due(now)).collect()
}

pub fn due_count(items: &[ReviewItem], now: DateTime<Utc>) -> usize {
    items.iter().filter(|item| item.is_due(now)).count()
}
