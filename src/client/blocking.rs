//! Synchronous facade over [`super::CflClient`]
//!
//! Every method drives the async operation to completion with
//! [`crate::utils::runtime::block_on`], so it can be called from plain
//! synchronous code as well as from inside a tokio runtime.

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    Fixture, LeagueLeaders, LedgerTransaction, Page, PlayerStats, Roster, Season, Standings, Team,
    TeamStats, Venue,
};
use crate::transport::{HttpTransport, Transport};
use crate::utils::runtime::block_on;

/// Blocking CFL API client
#[derive(Debug, Clone)]
pub struct CflClient {
    inner: super::CflClient,
}

impl CflClient {
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Calls may each run on a fresh runtime, so the transport keeps no idle connections
    pub fn with_config(config: &Config) -> Result<Self> {
        super::validate_config(config)?;
        let transport =
            HttpTransport::unpooled(config.request_timeout(), config.api.user_agent.as_deref())?;
        Self::with_transport(config, Arc::new(transport))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            inner: super::CflClient::with_transport(config, transport)?,
        })
    }

    /// The async client this facade drives
    pub fn as_async(&self) -> &super::CflClient {
        &self.inner
    }

    pub fn get_teams(&self) -> Result<Vec<Team>> {
        run(self.inner.get_teams())
    }

    pub fn get_team(&self, team_id: i64) -> Result<Team> {
        run(self.inner.get_team(team_id))
    }

    pub fn get_venues(&self, page: Page) -> Result<Vec<Venue>> {
        run(self.inner.get_venues(page))
    }

    pub fn get_venue(&self, venue_id: i64) -> Result<Venue> {
        run(self.inner.get_venue(venue_id))
    }

    pub fn get_seasons(&self, page: Page) -> Result<Vec<Season>> {
        run(self.inner.get_seasons(page))
    }

    pub fn get_season(&self, season_id: i64) -> Result<Season> {
        run(self.inner.get_season(season_id))
    }

    pub fn get_fixtures(&self, season_id: Option<i64>, page: Page) -> Result<Vec<Fixture>> {
        run(self.inner.get_fixtures(season_id, page))
    }

    pub fn get_rosters(&self) -> Result<Vec<Roster>> {
        run(self.inner.get_rosters())
    }

    pub fn get_roster(&self, roster_id: i64) -> Result<Roster> {
        run(self.inner.get_roster(roster_id))
    }

    pub fn get_ledger(&self, year: i32) -> Result<Vec<LedgerTransaction>> {
        run(self.inner.get_ledger(year))
    }

    pub fn get_team_stats(&self, season_id: Option<i32>) -> Result<Vec<TeamStats>> {
        run(self.inner.get_team_stats(season_id))
    }

    pub fn get_team_stat(&self, team_stats_id: i64, season_id: Option<i32>) -> Result<TeamStats> {
        run(self.inner.get_team_stat(team_stats_id, season_id))
    }

    pub fn get_player_stats(&self, season_id: Option<i32>, page: Page) -> Result<Vec<PlayerStats>> {
        run(self.inner.get_player_stats(season_id, page))
    }

    pub fn get_player_stat(&self, player_stats_id: i64) -> Result<PlayerStats> {
        run(self.inner.get_player_stat(player_stats_id))
    }

    pub fn get_player_by_pims_id(&self, player_id: i64) -> Result<PlayerStats> {
        run(self.inner.get_player_by_pims_id(player_id))
    }

    pub fn get_standings(&self, year: i32) -> Result<Standings> {
        run(self.inner.get_standings(year))
    }

    /// Blocks until all three category fetches have settled
    pub fn get_leaderboards(&self, season: i32) -> Result<LeagueLeaders> {
        run(self.inner.get_leaderboards(season))
    }
}

fn run<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send,
    T: Send,
{
    block_on(future).map_err(Error::Runtime)?
}
