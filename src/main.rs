use anyhow::Result;

use chess_rating_history::cli::Command;
use chess_rating_history::{
    handle_export, handle_players, handle_ratings, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(port),
        Command::Players { perf, top } => handle_players(perf, top),
        Command::Ratings {
            username,
            perf,
            days,
        } => handle_ratings(&username, perf, days),
        Command::Export {
            perf,
            top,
            days,
            output,
        } => handle_export(perf, top, days, output),
    }
}
