use std::env;

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub api_base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    pub max_concurrent_requests: usize,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://lichess.org/api".to_string(),
            user_agent: "ChessRatingHistory/1.0",
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
            max_concurrent_requests: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Redis connection URL; in-process cache when unset
    pub redis_url: Option<String>,
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            redis_url: None,
            ttl_secs: 3600,
        }
    }
}

/// Bounds on query parameters
#[derive(Debug, Clone)]
pub struct QueryLimits {
    pub max_top: u32,
    pub max_days: u32,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_top: 100,
            max_days: 365,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub gateway: GatewaySettings,
    pub cache: CacheSettings,
    pub limits: QueryLimits,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `LICHESS_API_BASE_URL` and `REDIS_URL`
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Some(url) = read_var("LICHESS_API_BASE_URL") {
            config.gateway.api_base_url = url;
        }
        config.cache.redis_url = read_var("REDIS_URL");
        config
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
