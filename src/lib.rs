pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod rate_limiter;
pub mod rating;
pub mod services;

use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::settings::{AppConfig, QueryLimits};
use crate::domain::PerfType;
use crate::rating::short_labeled;
use crate::services::export::{default_filename, write_csv};
use crate::services::ratings::RatingsService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_players(perf: PerfType, top: u32) -> Result<()> {
    let config = AppConfig::from_env();
    check_limits(&config.limits, top, 1)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = RatingsService::from_config(&config).await?;
        for player in service.top_players(perf, top).await {
            info!("{}", player.username);
        }
        Ok(())
    })
}

pub fn handle_ratings(username: &str, perf: PerfType, days: u32) -> Result<()> {
    let config = AppConfig::from_env();
    check_limits(&config.limits, 1, days)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = RatingsService::from_config(&config).await?;
        let series = service.player_ratings(username, perf, days).await;
        info!("{}", describe_ratings(username, &short_labeled(&series)));
        Ok(())
    })
}

pub fn handle_export(perf: PerfType, top: u32, days: u32, output: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::from_env();
    check_limits(&config.limits, top, days)?;
    let path = output.unwrap_or_else(|| PathBuf::from(default_filename(perf, top, days)));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = RatingsService::from_config(&config).await?;
        let table = service.ratings_table(perf, top, days).await;
        write_csv(&table, &path)
    })
}

fn check_limits(limits: &QueryLimits, top: u32, days: u32) -> Result<()> {
    ensure!(
        (1..=limits.max_top).contains(&top),
        "top must be between 1 and {}",
        limits.max_top
    );
    ensure!(
        (1..=limits.max_days).contains(&days),
        "days must be between 1 and {}",
        limits.max_days
    );
    Ok(())
}

/// `name, {Jan 08: 1500, Jan 09: 1510}`
fn describe_ratings(username: &str, ratings: &[(String, i32)]) -> String {
    if ratings.is_empty() {
        return format!("No rating history available for {}", username);
    }

    let entries: Vec<String> = ratings
        .iter()
        .map(|(label, rating)| format!("{}: {}", label, rating))
        .collect();
    format!("{}, {{{}}}", username, entries.join(", "))
}
