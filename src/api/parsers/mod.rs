pub mod history;
pub mod players;

pub use history::parse_rating_history;
pub use players::parse_top_players;
