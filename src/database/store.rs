//! Key-value persistence seam used by the scheduler.
//!
//! A store maps a learner id to one opaque serialized record. Every save
//! replaces the whole record.

use crate::error::StoreError;
use std::collections::HashMap;

pub trait StateStore {
    /// Returns `Ok(None)` when nothing has been stored for the learner yet.
    fn load(&self, learner_id: &str) -> Result<Option<String>, StoreError>;

    fn save(&mut self, learner_id: &str, record: &str) -> Result<(), StoreError>;
}

impl<S: StateStore + ?Sized> StateStore for &mut S {
    fn load(&self, learner_id: &str) -> Result<Option<String>, StoreError> {
        (**self).load(learner_id)
    }

    fn save(&mut self, learner_id: &str, record: &str) -> Result<(), StoreError> {
        (**self).save(learner_id, record)
    }
}

/// Non-durable store for tests and throwaway sessions.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    records: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, learner_id: &str) -> Option<&str> {
        self.records.get(learner_id).map(String::as_str)
    }

    /// Overwrites a record directly, bypassing the scheduler.
    pub fn insert_raw(&mut self, learner_id: &str, record: &str) {
        self.records.insert(learner_id.to_string(), record.to_string());
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StateStore for InMemoryStore {
    fn load(&self, learner_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records.get(learner_id).cloned())
    }

    fn save(&mut self, learner_id: &str, record: &str) -> Result<(), StoreError> {
        self.insert_raw(learner_id, record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_learner_loads_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.load("nobody").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_replaces_record() {
        let mut store = InMemoryStore::new();
        store.save("alice", "{\"v\":1}").unwrap();
        store.save("alice", "{\"v\":2}").unwrap();
        store.save("bob", "{}").unwrap();

        assert_eq!(store.load("alice").unwrap().as_deref(), Some("{\"v\":2}"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut store = InMemoryStore::new();
        {
            let mut borrowed = &mut store;
            borrowed.save("alice", "{}").unwrap();
        }
        assert_eq!(store.get("alice"), Some("{}"));
    }
}
