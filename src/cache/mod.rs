pub mod memory_cache;
pub mod redis_cache;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;

use crate::config::settings::CacheSettings;
use crate::errors::cache_context;

/// Key-value store with per-entry expiry
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;
}

/// Connect to Redis when configured, otherwise keep entries in process memory
pub async fn connect(settings: &CacheSettings) -> Arc<dyn Cache> {
    let Some(url) = settings.redis_url.as_deref() else {
        info!("REDIS_URL not set, using in-memory cache");
        return Arc::new(MemoryCache::new());
    };

    match RedisCache::connect(url).await {
        Ok(cache) => {
            info!("Connected to Redis cache");
            Arc::new(cache)
        }
        Err(e) => {
            warn!("Redis unavailable ({:?}), falling back to in-memory cache", e);
            Arc::new(MemoryCache::new())
        }
    }
}

/// Load and decode a cached JSON value. Cache or decode failures count as a miss.
pub async fn load_json<T: for<'de> Deserialize<'de>>(cache: &dyn Cache, key: &str) -> Option<T> {
    let raw = match cache.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("Cache miss for key: {}", key);
            return None;
        }
        Err(e) => {
            warn!("{}: {:?}", cache_context("read", key), e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            debug!("Cache hit for key: {}", key);
            Some(value)
        }
        Err(e) => {
            warn!("{}: {:?}", cache_context("decode", key), e);
            None
        }
    }
}

/// Encode and store a JSON value. Failures are logged and otherwise ignored.
pub async fn store_json<T: Serialize + Sync>(cache: &dyn Cache, key: &str, value: &T, ttl_secs: u64) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warn!("{}: {:?}", cache_context("encode", key), e);
            return;
        }
    };

    if let Err(e) = cache.set(key, &json, ttl_secs).await {
        warn!("{}: {:?}", cache_context("write", key), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: String,
    }

    #[tokio::test]
    async fn test_json_round_trip() {
        let cache = MemoryCache::new();
        let data = TestData {
            value: "test".to_string(),
        };

        store_json(&cache, "test_key", &data, 60).await;
        let loaded: Option<TestData> = load_json(&cache, "test_key").await;

        assert_eq!(loaded, Some(data));
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_a_miss() {
        let cache = MemoryCache::new();
        cache.set("broken", "not json", 60).await.unwrap();

        let loaded: Option<TestData> = load_json(&cache, "broken").await;

        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn test_connect_without_redis_url() {
        let settings = CacheSettings {
            redis_url: None,
            ttl_secs: 60,
        };
        let cache = connect(&settings).await;

        cache.set("key", "value", 60).await.unwrap();
        assert_eq!(cache.get("key").await.unwrap(), Some("value".to_string()));
    }
}
