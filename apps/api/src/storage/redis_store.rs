//! Redis-backed storage, the synchronized area preferred when `REDIS_URL`
//! is configured.

use async_trait::async_trait;
use redis::AsyncCommands;

use super::{CvStore, StorageError};

#[derive(Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn new(url: &str) -> Result<Self, StorageError> {
        Ok(Self {
            client: redis::Client::open(url)?,
        })
    }
}

#[async_trait]
impl CvStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = con.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let _: () = con.set(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        // DEL of the single key only; a missing key is a no-op.
        let _: () = con.del(key).await?;
        Ok(())
    }
}
