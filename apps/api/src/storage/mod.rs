//! Single-slot key/value storage for the CV and the API key.
//!
//! Two backends implement the same contract: `RedisStore` is the
//! synchronized area and is preferred when `REDIS_URL` is configured;
//! `FileStore` is the page-local fallback. Values are overwritten wholesale
//! on every save, and `delete` removes the single named key only, never
//! the whole area.

pub mod file_store;
pub mod handlers;
pub mod redis_store;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::cv::Cv;

/// Storage key for the JSON-serialized CV. Exactly one CV is tracked per
/// installation.
pub const CV_STORAGE_KEY: &str = "waddyCV";
/// Storage key for the OpenAI API key saved through settings.
pub const API_KEY_STORAGE_KEY: &str = "waddyOpenAIApiKey";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Plain string key/value storage. Both backends are wholesale: `set`
/// overwrites, `get` returns the full value, `delete` drops the one key.
#[async_trait]
pub trait CvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads the stored CV, if any. An empty slot is normal absent state.
pub async fn load_cv(store: &dyn CvStore) -> Result<Option<Cv>, StorageError> {
    match store.get(CV_STORAGE_KEY).await? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Overwrites the CV slot with the given CV.
pub async fn save_cv(store: &dyn CvStore, cv: &Cv) -> Result<(), StorageError> {
    let json = serde_json::to_string(cv)?;
    store.set(CV_STORAGE_KEY, &json).await
}

pub async fn delete_cv(store: &dyn CvStore) -> Result<(), StorageError> {
    store.delete(CV_STORAGE_KEY).await
}

pub async fn load_api_key(store: &dyn CvStore) -> Result<Option<String>, StorageError> {
    store.get(API_KEY_STORAGE_KEY).await
}

pub async fn save_api_key(store: &dyn CvStore, api_key: &str) -> Result<(), StorageError> {
    store.set(API_KEY_STORAGE_KEY, api_key).await
}

pub async fn delete_api_key(store: &dyn CvStore) -> Result<(), StorageError> {
    store.delete(API_KEY_STORAGE_KEY).await
}

#[cfg(test)]
mod tests {
    use super::file_store::FileStore;
    use super::*;
    use crate::models::cv::sample_cv;

    #[tokio::test]
    async fn test_cv_round_trip_through_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let cv = sample_cv();
        save_cv(&store, &cv).await.unwrap();
        let loaded = load_cv(&store).await.unwrap();
        assert_eq!(loaded, Some(cv));
    }

    #[tokio::test]
    async fn test_empty_slot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(load_cv(&store).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_cv_leaves_api_key_intact() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        save_cv(&store, &sample_cv()).await.unwrap();
        save_api_key(&store, "sk-test").await.unwrap();

        delete_cv(&store).await.unwrap();

        assert_eq!(load_cv(&store).await.unwrap(), None);
        assert_eq!(
            load_api_key(&store).await.unwrap().as_deref(),
            Some("sk-test")
        );
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let mut cv = sample_cv();
        save_cv(&store, &cv).await.unwrap();

        cv.skills.clear();
        cv.title = "Staff Engineer".to_string();
        save_cv(&store, &cv).await.unwrap();

        let loaded = load_cv(&store).await.unwrap().unwrap();
        assert_eq!(loaded.title, "Staff Engineer");
        assert!(loaded.skills.is_empty());
    }
}
