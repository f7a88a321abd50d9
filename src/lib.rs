//! cfl - Canadian Football League data client
//!
//! Typed access to the CFL statistics API, plus the standings and league
//! leaders that are only published as web pages.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`transport`] - HTTP transport adapter and default headers
//! - [`classify`] - Maps HTTP outcomes onto the [`error::ApiFault`] taxonomy
//! - [`scrape`] - HTML extraction for standings and leaderboards
//! - [`client`] - Async client, league leaders fan-out and blocking facade
//! - [`models`] - Resource schemas
//! - [`utils`] - Common utilities and helpers
//!
//! # Example
//!
//! ```no_run
//! use cfl::client::CflClient;
//! use cfl::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = CflClient::with_config(&config)?;
//!     let standings = client.get_standings(2024).await?;
//!     println!("{} western teams", standings.west.len());
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod scrape;
pub mod transport;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::CflClient;
    pub use crate::config::Config;
    pub use crate::error::{ApiFault, CflErrorTrait, Error, ErrorCategory, Result};
    pub use crate::models::{
        LeaderboardEntry, LeagueLeaders, Page, StatCategory, Standings, StandingsRow,
    };
}

// Direct re-exports for convenience
pub use client::CflClient;
pub use error::{ApiFault, Error, Result};
