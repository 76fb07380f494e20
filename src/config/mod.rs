pub mod settings;

pub use settings::{AppConfig, CacheSettings, GatewaySettings, QueryLimits};
