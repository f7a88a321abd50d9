use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cfl::client::{CflClient, DEFAULT_SEASON};
use cfl::config::Config;
use cfl::models::{Page, StatCategory, DEFAULT_LIMIT, DEFAULT_PAGE};

#[derive(Parser)]
#[command(
    name = "cfl",
    version,
    about = "Query CFL teams, schedules, statistics, standings and league leaders",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); defaults to the configured format
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// TOML configuration file; environment variables are used otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,

    /// Page size
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u32,
}

impl From<PageArgs> for Page {
    fn from(args: PageArgs) -> Self {
        Page::new(args.page, args.limit)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all teams
    Teams,

    /// Show one team
    Team { id: i64 },

    /// List venues
    Venues {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one venue
    Venue { id: i64 },

    /// List seasons
    Seasons {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one season
    Season { id: i64 },

    /// List fixtures, optionally for a single season
    Fixtures {
        #[arg(short, long)]
        season: Option<i64>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List rosters
    Rosters,

    /// Show one roster
    Roster { id: i64 },

    /// Player transactions for a year
    Ledger { year: i32 },

    /// Team statistics, or one team's statistics with --id
    TeamStats {
        #[arg(long)]
        id: Option<i64>,

        #[arg(short, long)]
        season: Option<i32>,
    },

    /// Player statistics, or one record with --id
    PlayerStats {
        #[arg(long)]
        id: Option<i64>,

        #[arg(short, long)]
        season: Option<i32>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Look up a player by PIMS id
    Player { pims_id: i64 },

    /// Division standings
    Standings {
        #[arg(default_value_t = DEFAULT_SEASON)]
        year: i32,
    },

    /// League leaders, all categories or a single one
    Leaders {
        #[arg(default_value_t = DEFAULT_SEASON)]
        season: i32,

        /// offence, defence or special-teams
        #[arg(short, long, value_parser = parse_category)]
        category: Option<StatCategory>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    let log_format = cli
        .log_format
        .clone()
        .unwrap_or_else(|| config.logging.format.clone());
    setup_tracing(&log_format, &config.logging.level, cli.verbose)?;

    let client = CflClient::with_config(&config).context("Failed to create client")?;

    match cli.command {
        Commands::Teams => print_json(&client.get_teams().await?),
        Commands::Team { id } => print_json(&client.get_team(id).await?),
        Commands::Venues { page } => print_json(&client.get_venues(page.into()).await?),
        Commands::Venue { id } => print_json(&client.get_venue(id).await?),
        Commands::Seasons { page } => print_json(&client.get_seasons(page.into()).await?),
        Commands::Season { id } => print_json(&client.get_season(id).await?),
        Commands::Fixtures { season, page } => {
            print_json(&client.get_fixtures(season, page.into()).await?)
        }
        Commands::Rosters => print_json(&client.get_rosters().await?),
        Commands::Roster { id } => print_json(&client.get_roster(id).await?),
        Commands::Ledger { year } => print_json(&client.get_ledger(year).await?),
        Commands::TeamStats { id, season } => match id {
            Some(id) => print_json(&client.get_team_stat(id, season).await?),
            None => print_json(&client.get_team_stats(season).await?),
        },
        Commands::PlayerStats { id, season, page } => match id {
            Some(id) => print_json(&client.get_player_stat(id).await?),
            None => print_json(&client.get_player_stats(season, page.into()).await?),
        },
        Commands::Player { pims_id } => print_json(&client.get_player_by_pims_id(pims_id).await?),
        Commands::Standings { year } => {
            tracing::info!(year, "Fetching standings");
            let standings = client.get_standings(year).await?;
            if standings.is_empty() {
                tracing::warn!(year, "No standings found");
            }
            print_json(&standings)
        }
        Commands::Leaders { season, category } => {
            tracing::info!(season, category = ?category, "Fetching league leaders");
            let leaders = client.get_leaderboards(season).await?;
            match category {
                Some(category) => print_json(leaders.category(category)),
                None => print_json(&leaders),
            }
        }
    }
}

fn parse_category(name: &str) -> std::result::Result<StatCategory, String> {
    StatCategory::parse(name).ok_or_else(|| format!("unknown stat category: {name}"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("cfl=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(format!("cfl={level},warn")))
            .context("Invalid log level")?
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["cfl", "leaders", "--category", "kicking"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_parsed_from_flag() {
        let cli = Cli::try_parse_from(["cfl", "leaders", "2023", "-c", "defence"]).unwrap();
        match cli.command {
            Commands::Leaders { season, category } => {
                assert_eq!(season, 2023);
                assert_eq!(category, Some(StatCategory::Defence));
            }
            _ => panic!("expected leaders command"),
        }
    }
}
