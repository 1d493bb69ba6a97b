use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::repo::{ProfileRecord, ProfileStore};

/// In-memory ProfileStore for tests and local development.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    profiles: Arc<Mutex<HashMap<String, ProfileRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProfileStore for MemoryStore {
    type Error = Infallible;

    async fn get_by_user(&self, user_id: &str) -> Result<Option<ProfileRecord>, Infallible> {
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn get_by_alias(&self, alias: &str) -> Result<Option<ProfileRecord>, Infallible> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| p.alias == alias)
            .cloned())
    }

    async fn alias_owners(&self, alias: &str) -> Result<Vec<String>, Infallible> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.alias == alias)
            .map(|p| p.user_id.clone())
            .collect())
    }

    async fn upsert(&self, record: &ProfileRecord) -> Result<(), Infallible> {
        let mut profiles = self.profiles.lock().unwrap();
        let mut record = record.clone();
        if let Some(existing) = profiles.get(&record.user_id) {
            record.content.profile.is_premium = existing.content.profile.is_premium;
        }
        profiles.insert(record.user_id.clone(), record);
        Ok(())
    }

    async fn set_premium(
        &self,
        user_id: &str,
        premium: bool,
        updated_at: DateTime<Utc>,
    ) -> Result<bool, Infallible> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(record) = profiles.get_mut(user_id) else {
            return Ok(false);
        };
        record.content.profile.is_premium = Some(premium);
        record.updated_at = updated_at;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardContent;
    use chrono::Utc;

    fn record(user_id: &str, alias: &str) -> ProfileRecord {
        let now = Utc::now();
        ProfileRecord {
            user_id: user_id.to_string(),
            alias: alias.to_string(),
            content: CardContent::blank(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_upsert_replaces_by_user() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.upsert(&record("u1", "first")).await.unwrap();
        store.upsert(&record("u1", "second")).await.unwrap();

        assert_eq!(store.len(), 1);
        let found = store.get_by_user("u1").await.unwrap().unwrap();
        assert_eq!(found.alias, "second");
        assert!(store.get_by_alias("first").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_keeps_stored_premium_flag() {
        let store = MemoryStore::new();
        assert!(!store.set_premium("u1", true, Utc::now()).await.unwrap());

        store.upsert(&record("u1", "joao")).await.unwrap();
        assert!(store.set_premium("u1", true, Utc::now()).await.unwrap());
        store.upsert(&record("u1", "joao")).await.unwrap();

        let found = store.get_by_user("u1").await.unwrap().unwrap();
        assert_eq!(found.content.profile.is_premium, Some(true));
    }

    #[tokio::test]
    async fn test_lookup_by_alias() {
        let store = MemoryStore::new();
        store.upsert(&record("u1", "joao")).await.unwrap();
        store.upsert(&record("u2", "maria")).await.unwrap();

        let found = store.get_by_alias("maria").await.unwrap().unwrap();
        assert_eq!(found.user_id, "u2");
        assert_eq!(store.alias_owners("joao").await.unwrap(), vec!["u1"]);
        assert!(store.alias_owners("nobody").await.unwrap().is_empty());
        assert!(store.get_by_user("u3").await.unwrap().is_none());
    }
}
