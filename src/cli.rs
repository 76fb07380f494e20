use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::PerfType;

#[derive(Parser, Debug)]
#[command(author, version, about = "chess rating history service")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the usernames of the top players
    Players {
        /// Performance category: classical, blitz or rapid
        #[arg(short = 't', long = "type", default_value = "classical")]
        perf: PerfType,
        /// Number of players
        #[arg(short = 'n', long, default_value_t = 50)]
        top: u32,
    },
    /// Print a player's day-by-day rating history
    Ratings {
        username: String,
        /// Performance category: classical, blitz or rapid
        #[arg(short = 't', long = "type", default_value = "classical")]
        perf: PerfType,
        /// Number of days, ending today
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },
    /// Export the top players' ratings as CSV
    Export {
        /// Performance category: classical, blitz or rapid
        #[arg(short = 't', long = "type", default_value = "classical")]
        perf: PerfType,
        /// Number of players
        #[arg(short = 'n', long, default_value_t = 50)]
        top: u32,
        /// Number of days, ending today
        #[arg(short, long, default_value_t = 30)]
        days: u32,
        /// Output file (defaults to top_{top}_{type}_ratings_{days}days.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["app", "export", "--type", "Rapid", "-n", "10", "-d", "14"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Export {
                perf: PerfType::Rapid,
                top: 10,
                days: 14,
                output: None,
            }
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(Cli::try_parse_from(["app", "players", "--type", "bullet"]).is_err());
    }

    #[test]
    fn test_ratings_defaults() {
        let cli = Cli::try_parse_from(["app", "ratings", "DrNykterstein"]).unwrap();

        assert_eq!(
            cli.command,
            Command::Ratings {
                username: "DrNykterstein".to_string(),
                perf: PerfType::Classical,
                days: 30,
            }
        );
    }
}
