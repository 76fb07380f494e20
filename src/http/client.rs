use crate::rate_limiter::RateLimiter;
use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::{Mutex, Semaphore};

/// HTTP client with built-in rate limiting, safe to share between tasks
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: Mutex<RateLimiter>,
    permits: Semaphore,
}

impl RateLimitedClient {
    pub fn new(
        user_agent: &str,
        timeout_secs: u64,
        rate_limit_ms: u64,
        max_concurrent: usize,
    ) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        let rate_limiter = Mutex::new(RateLimiter::new(rate_limit_ms));
        let permits = Semaphore::new(max_concurrent.max(1));

        Ok(Self {
            client,
            rate_limiter,
            permits,
        })
    }

    /// Send a GET request once a concurrency permit and a rate-limit slot are free
    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let _permit = self
            .permits
            .acquire()
            .await
            .context("HTTP client is shutting down")?;
        self.wait_for_slot().await;
        self.send_get_request(url).await
    }

    async fn wait_for_slot(&self) {
        let slot = {
            let mut limiter = self.rate_limiter.lock().await;
            let slot = limiter.reserve();
            debug!("Scheduled request #{}", limiter.request_count());
            slot
        };
        tokio::time::sleep_until(slot).await;
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }
}
