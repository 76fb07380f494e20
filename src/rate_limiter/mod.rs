use std::time::Duration;
use tokio::time::Instant;

/// Controls the rate of requests to prevent API throttling.
///
/// Enforces a minimum spacing between the starts of consecutive requests.
pub struct RateLimiter {
    delay: Duration,
    next_slot: Option<Instant>,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            next_slot: None,
            request_count: 0,
        }
    }

    /// Reserve the next request slot and return when it opens
    pub fn reserve(&mut self) -> Instant {
        let now = Instant::now();
        let slot = match self.next_slot {
            Some(next) if next > now => next,
            _ => now,
        };
        self.next_slot = Some(slot + self.delay);
        self.request_count += 1;
        slot
    }

    pub fn request_count(&self) -> usize {
        self.request_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_request_is_immediate() {
        let mut limiter = RateLimiter::new(1000);
        let before = Instant::now();

        let slot = limiter.reserve();

        assert!(slot <= Instant::now());
        assert!(slot >= before);
    }

    #[tokio::test]
    async fn test_slots_are_spaced() {
        let mut limiter = RateLimiter::new(100);

        let first = limiter.reserve();
        let second = limiter.reserve();
        let third = limiter.reserve();

        assert_eq!(second - first, Duration::from_millis(100));
        assert_eq!(third - second, Duration::from_millis(100));
        assert_eq!(limiter.request_count(), 3);
    }
}
