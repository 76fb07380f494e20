pub mod export;
pub mod ratings;
pub mod server;
