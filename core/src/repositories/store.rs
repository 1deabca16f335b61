//! Generic in-memory record store shared by the mock repositories.
//!
//! Each entity-specific mock wraps a `MemoryStore<T>` and adds its own
//! queries on top; the store only knows how to address records by id and how
//! to scan them with predicates while holding the appropriate lock.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Entity;
use crate::errors::{DomainError, DomainResult};

/// Thread-safe map of records keyed by id
pub struct MemoryStore<T: Entity> {
    resource: &'static str,
    records: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Entity> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource,
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Entity> MemoryStore<T> {
    /// `resource` names the entity in `NotFound` errors
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        self.records.read().await.get(&id).cloned()
    }

    /// Inserts `record` unless an existing one satisfies `conflicts`
    pub async fn insert_unique<F>(&self, record: T, conflicts: F, message: &str) -> DomainResult<T>
    where
        F: Fn(&T) -> bool,
    {
        let mut records = self.records.write().await;
        if records.values().any(|existing| conflicts(existing)) {
            return Err(DomainError::conflict(message));
        }
        records.insert(record.id(), record.clone());
        Ok(record)
    }

    pub async fn insert(&self, record: T) -> T {
        self.records.write().await.insert(record.id(), record.clone());
        record
    }

    /// Replaces an existing record
    pub async fn replace(&self, record: T) -> DomainResult<T> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(DomainError::not_found(self.resource)),
        }
    }

    /// Mutates a record in place under the write lock and returns the result
    pub async fn modify<F>(&self, id: Uuid, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        records.get_mut(&id).map(|record| {
            f(record);
            record.clone()
        })
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.records.write().await.remove(&id).is_some()
    }

    /// Removes every record matching `predicate`, returning how many went
    pub async fn remove_where<F>(&self, predicate: F) -> u64
    where
        F: Fn(&T) -> bool,
    {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| !predicate(record));
        (before - records.len()) as u64
    }

    pub async fn find<F>(&self, predicate: F) -> Option<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .values()
            .find(|record| predicate(record))
            .cloned()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub async fn exists<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        self.records.read().await.values().any(|record| predicate(record))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Enrollment;

    #[tokio::test]
    async fn test_insert_unique_rejects_conflicts() {
        let store = MemoryStore::<Enrollment>::new("Enrollment");
        let (user, course) = (Uuid::new_v4(), Uuid::new_v4());

        store
            .insert_unique(Enrollment::new(user, course), |e| e.matches(user, course), "dup")
            .await
            .unwrap();
        let second = store
            .insert_unique(Enrollment::new(user, course), |e| e.matches(user, course), "dup")
            .await;

        assert!(matches!(second, Err(DomainError::Conflict { .. })));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_replace_missing_is_not_found() {
        let store = MemoryStore::<Enrollment>::new("Enrollment");
        let result = store.replace(Enrollment::new(Uuid::new_v4(), Uuid::new_v4())).await;
        match result {
            Err(DomainError::NotFound { resource }) => assert_eq!(resource, "Enrollment"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remove_where_counts() {
        let store = MemoryStore::<Enrollment>::new("Enrollment");
        let course = Uuid::new_v4();
        store.insert(Enrollment::new(Uuid::new_v4(), course)).await;
        store.insert(Enrollment::new(Uuid::new_v4(), course)).await;
        store.insert(Enrollment::new(Uuid::new_v4(), Uuid::new_v4())).await;

        assert_eq!(store.remove_where(|e| e.course_id == course).await, 2);
        assert_eq!(store.len().await, 1);
    }
}
