pub mod cached_gateway;
pub mod gateway;
pub mod handlers;
pub mod lichess_client;
pub mod models;
pub mod parsers;
pub mod routes;

pub use cached_gateway::CachedGateway;
pub use gateway::RatingGateway;
pub use lichess_client::LichessClient;
