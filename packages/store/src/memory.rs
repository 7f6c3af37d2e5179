use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Memory, MemoryFilter, NewMemory, NewTravel, Travel};
use crate::repo::{RecordStore, StoreError};

/// In-memory RecordStore for tests and database-less development.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    memories: Arc<Mutex<Vec<Memory>>>,
    travels: Arc<Mutex<Vec<Travel>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend("memory store lock poisoned".into()))
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_memories(&self, filter: MemoryFilter) -> Result<Vec<Memory>, StoreError> {
        let mut memories: Vec<Memory> = lock(&self.memories)?
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        memories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(memories)
    }

    async fn insert_memory(&self, memory: NewMemory) -> Result<Memory, StoreError> {
        let memory = memory.into_memory(Uuid::new_v4());
        lock(&self.memories)?.push(memory.clone());
        Ok(memory)
    }

    async fn list_travels(&self) -> Result<Vec<Travel>, StoreError> {
        let mut travels = lock(&self.travels)?.clone();
        travels.sort_by(|a, b| b.date_visited.cmp(&a.date_visited));
        Ok(travels)
    }

    async fn insert_travel(&self, travel: NewTravel) -> Result<Travel, StoreError> {
        let travel = travel.into_travel(Uuid::new_v4());
        lock(&self.travels)?.push(travel.clone());
        Ok(travel)
    }

    async fn count_memories(&self) -> Result<usize, StoreError> {
        Ok(lock(&self.memories)?.len())
    }

    async fn count_travels(&self) -> Result<usize, StoreError> {
        Ok(lock(&self.travels)?.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;
    use crate::models::{AgeCategory, Location, MemoryType};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn memory(title: &str, age: AgeCategory, kind: MemoryType, created_at: DateTime<Utc>) -> NewMemory {
        NewMemory {
            title: title.to_string(),
            description: String::new(),
            images: vec![format!("https://img.example/{title}.jpg")],
            age_category: age,
            r#type: kind,
            created_at,
        }
    }

    fn travel(title: &str, visited: DateTime<Utc>) -> NewTravel {
        NewTravel {
            title: title.to_string(),
            description: String::new(),
            location: Location {
                name: "Lisboa".into(),
                latitude: 38.72,
                longitude: -9.14,
                country: Some("Portugal".into()),
            },
            images: Vec::new(),
            date_visited: visited,
            created_at: at(20),
        }
    }

    #[tokio::test]
    async fn test_list_memories_empty() {
        let store = MemoryStore::new();
        assert!(store
            .list_memories(MemoryFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_age_sorted_newest_first() {
        let store = MemoryStore::new();
        store
            .insert_memory(memory("old", AgeCategory::Year1, MemoryType::Memory, at(1)))
            .await
            .unwrap();
        store
            .insert_memory(memory("other", AgeCategory::Years2, MemoryType::Memory, at(5)))
            .await
            .unwrap();
        store
            .insert_memory(memory("new", AgeCategory::Year1, MemoryType::Schoolwork, at(9)))
            .await
            .unwrap();

        let filter = MemoryFilter {
            age_category: Some(AgeCategory::Year1),
            r#type: None,
        };
        let listed = store.list_memories(filter).await.unwrap();

        let titles: Vec<_> = listed.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "old"]);
        assert!(listed.iter().all(|m| m.age_category == AgeCategory::Year1));
    }

    #[tokio::test]
    async fn test_filter_by_age_and_type() {
        let store = MemoryStore::new();
        store
            .insert_memory(memory("a", AgeCategory::Year1, MemoryType::Memory, at(1)))
            .await
            .unwrap();
        store
            .insert_memory(memory("b", AgeCategory::Year1, MemoryType::Schoolwork, at(2)))
            .await
            .unwrap();

        let listed = store
            .list_memories(MemoryFilter {
                age_category: Some(AgeCategory::Year1),
                r#type: Some(MemoryType::Schoolwork),
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "b");
    }

    #[tokio::test]
    async fn test_same_payload_twice_gives_distinct_records() {
        let store = MemoryStore::new();
        let payload = memory("twice", AgeCategory::Years4, MemoryType::Memory, at(3));

        let first = store.insert_memory(payload.clone()).await.unwrap();
        let second = store.insert_memory(payload).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            store.list_memories(MemoryFilter::default()).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_insert_stamps_both_timestamps() {
        let store = MemoryStore::new();
        let stored = store
            .insert_memory(memory("stamp", AgeCategory::Year1, MemoryType::Memory, at(7)))
            .await
            .unwrap();
        assert_eq!(stored.created_at, at(7));
        assert_eq!(stored.updated_at, at(7));
    }

    #[tokio::test]
    async fn test_travels_sorted_by_visit_date() {
        let store = MemoryStore::new();
        store.insert_travel(travel("first", at(1))).await.unwrap();
        store
            .insert_travel(travel("latest", at(1) + Duration::days(30)))
            .await
            .unwrap();
        store.insert_travel(travel("middle", at(10))).await.unwrap();

        let titles: Vec<_> = store
            .list_travels()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["latest", "middle", "first"]);
    }

    #[tokio::test]
    async fn test_counts_track_inserts() {
        let store = MemoryStore::new();
        assert_eq!(store.count_memories().await.unwrap(), 0);
        assert_eq!(store.count_travels().await.unwrap(), 0);

        store
            .insert_memory(memory("a", AgeCategory::Year1, MemoryType::Memory, at(1)))
            .await
            .unwrap();
        store
            .insert_memory(memory("b", AgeCategory::Years2, MemoryType::Schoolwork, at(2)))
            .await
            .unwrap();
        store.insert_travel(travel("t", at(3))).await.unwrap();

        assert_eq!(store.count_memories().await.unwrap(), 2);
        assert_eq!(store.count_travels().await.unwrap(), 1);
    }
}
