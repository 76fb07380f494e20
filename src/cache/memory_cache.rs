use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use super::Cache;

struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Inserts between two sweeps of expired entries
const DEFAULT_SWEEP_INTERVAL: usize = 256;

#[derive(Default)]
struct Entries {
    map: HashMap<String, Entry>,
    inserts_since_sweep: usize,
}

impl Entries {
    fn sweep(&mut self, now: Instant) {
        let before = self.map.len();
        self.map.retain(|_, entry| entry.is_live(now));
        self.inserts_since_sweep = 0;
        debug!("Swept {} expired cache entries, {} left", before - self.map.len(), self.map.len());
    }
}

/// In-process cache, used when no Redis instance is configured.
/// Expired entries are dropped on read and swept every `sweep_interval` inserts.
pub struct MemoryCache {
    entries: Mutex<Entries>,
    sweep_interval: usize,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::with_sweep_interval(DEFAULT_SWEEP_INTERVAL)
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sweep_interval(sweep_interval: usize) -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
            sweep_interval: sweep_interval.max(1),
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        match entries.map.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.map.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now + Duration::from_secs(ttl_secs),
        };

        let mut entries = self.entries.lock().await;
        entries.map.insert(key.to_string(), entry);
        entries.inserts_since_sweep += 1;
        if entries.inserts_since_sweep >= self.sweep_interval {
            entries.sweep(now);
        }
        Ok(())
    }
}
