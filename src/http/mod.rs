pub mod client;

pub use client::RateLimitedClient;
