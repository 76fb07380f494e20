pub mod category;
pub mod models;

pub use category::{CategoryError, PerfType};
pub use models::{
    CurrentPerformance, PerfHistoryResponse, PerformanceHistory, Player, RatingPoint, RatingRow,
    RatingTable, TopPlayersResponse,
};
