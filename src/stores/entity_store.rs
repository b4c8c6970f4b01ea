use crate::core::error::StoreError;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// A record keyed by a store-assigned numeric id
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Create/read/update/delete over one entity type
pub trait EntityStore<T: Entity>: Send + Sync {
    /// All records in store iteration order
    fn get_all(&self) -> Vec<T>;

    fn get_by_id(&self, id: i64) -> Option<T>;

    /// Insert a new record; the store assigns its id
    fn create(&self, entity: T) -> T;

    /// Overwrite the record with the same id
    fn update(&self, entity: T) -> Result<T, StoreError>;

    /// Returns true if a record was removed
    fn delete(&self, entity: &T) -> bool;
}

/// In-memory store for any entity
///
/// Iteration order is ascending id, which for store-assigned ids is
/// insertion order.
pub struct InMemoryStore<T: Entity> {
    records: DashMap<i64, T>,
    next_id: AtomicI64,
}

impl<T: Entity> InMemoryStore<T> {
    /// Create a new InMemoryStore instance
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: DashMap::with_capacity(capacity),
            next_id: AtomicI64::new(1),
        }
    }

    /// Insert a record under its own id, replacing any record with the same id.
    /// Later `create` calls continue numbering after the highest seeded id.
    pub fn insert_seeded(&self, entity: T) {
        let id = entity.id();
        self.next_id.fetch_max(id.saturating_add(1), Ordering::SeqCst);
        self.records.insert(id, entity);
    }

    pub fn clear(&self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Entity> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> for InMemoryStore<T> {
    fn get_all(&self) -> Vec<T> {
        let mut records: Vec<T> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by_key(|record| record.id());
        records
    }

    fn get_by_id(&self, id: i64) -> Option<T> {
        self.records.get(&id).map(|entry| entry.value().clone())
    }

    fn create(&self, mut entity: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        self.records.insert(id, entity.clone());
        entity
    }

    fn update(&self, entity: T) -> Result<T, StoreError> {
        let id = entity.id();
        match self.records.get_mut(&id) {
            Some(mut existing) => {
                *existing = entity.clone();
                Ok(entity)
            }
            None => Err(StoreError::NotFound { id }),
        }
    }

    fn delete(&self, entity: &T) -> bool {
        self.records.remove(&entity.id()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: i64,
        text: String,
    }

    impl Entity for Note {
        fn id(&self) -> i64 {
            self.id
        }

        fn set_id(&mut self, id: i64) {
            self.id = id;
        }
    }

    fn note(id: i64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let first = store.create(note(0, "first"));
        let second = store.create(note(0, "second"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_create_ignores_caller_id() {
        let store = InMemoryStore::new();
        let created = store.create(note(99, "mine"));
        assert_eq!(created.id, 1);
        assert!(store.get_by_id(99).is_none());
    }

    #[test]
    fn test_seeded_ids_advance_sequence() {
        let store = InMemoryStore::with_capacity(16);
        store.insert_seeded(note(5, "five"));
        store.insert_seeded(note(2, "two"));

        let created = store.create(note(0, "six"));
        assert_eq!(created.id, 6);
    }

    #[test]
    fn test_seed_with_max_id_does_not_overflow() {
        let store = InMemoryStore::new();
        store.insert_seeded(note(i64::MAX, "last"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(i64::MAX).unwrap().text, "last");
    }

    #[test]
    fn test_get_all_is_ordered_by_id() {
        let store = InMemoryStore::new();
        for id in [9, 3, 7, 1] {
            store.insert_seeded(note(id, "x"));
        }
        let ids: Vec<i64> = store.get_all().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 7, 9]);
    }

    #[test]
    fn test_update_overwrites_existing() {
        let store = InMemoryStore::new();
        let created = store.create(note(0, "old"));

        let updated = store.update(note(created.id, "new")).unwrap();
        assert_eq!(updated.text, "new");
        assert_eq!(store.get_by_id(created.id).unwrap().text, "new");
    }

    #[test]
    fn test_update_missing_id_fails() {
        let store = InMemoryStore::new();
        let result = store.update(note(42, "ghost"));
        assert_eq!(result, Err(StoreError::NotFound { id: 42 }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete() {
        let store = InMemoryStore::new();
        let created = store.create(note(0, "doomed"));

        assert!(store.delete(&created));
        assert!(!store.delete(&created));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let store = InMemoryStore::new();
        store.create(note(0, "a"));
        store.clear();
        assert!(store.is_empty());
    }
}
