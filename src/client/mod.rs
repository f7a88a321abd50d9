//! API client
//!
//! [`CflClient`] maps one method to one API resource. JSON endpoints run
//! the response through [`crate::classify`] and surface every fault to the
//! caller. Standings and league leaders are scraped from web pages and are
//! best effort: once the season is accepted they always return a
//! well-formed, possibly empty, result.
//!
//! # Example
//!
//! ```no_run
//! use cfl::client::CflClient;
//! use cfl::models::Page;
//!
//! # async fn run() -> cfl::Result<()> {
//! let client = CflClient::new()?;
//! let teams = client.get_teams().await?;
//! let venues = client.get_venues(Page::default()).await?;
//! println!("{} teams, {} venues", teams.len(), venues.len());
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod endpoints;
mod leaders;

use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::classify::{classify, decode_payload, is_empty_payload};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{
    Fixture, LedgerTransaction, Page, PlayerStats, Roster, Season, Standings, Team, TeamStats,
    Venue,
};
use crate::scrape::extract_standings;
use crate::transport::{HttpTransport, RawRequest, Transport};
use crate::utils::player_photo_url;

pub use endpoints::{DEFAULT_SEASON, MAX_SEASON, MIN_SEASON};

/// Asynchronous CFL API client
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Clone)]
pub struct CflClient {
    transport: Arc<dyn Transport>,
    api_root: Url,
    web_url: String,
    leaderboard_url: String,
}

impl std::fmt::Debug for CflClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CflClient")
            .field("api_root", &self.api_root.as_str())
            .field("web_url", &self.web_url)
            .field("leaderboard_url", &self.leaderboard_url)
            .finish_non_exhaustive()
    }
}

impl CflClient {
    /// Client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&Config::default())
    }

    /// Client over the default HTTP transport
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration does not validate
    pub fn with_config(config: &Config) -> Result<Self> {
        validate_config(config)?;
        let transport =
            HttpTransport::new(config.request_timeout(), config.api.user_agent.as_deref())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Client over a caller-supplied transport
    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self {
            transport,
            api_root: endpoints::api_root(&config.api.base_url)?,
            web_url: config.api.web_url.clone(),
            leaderboard_url: config.api.leaderboard_url.clone(),
        })
    }

    // ---- teams & venues ----

    pub async fn get_teams(&self) -> Result<Vec<Team>> {
        self.get_json("teams", self.api_request(endpoints::TEAMS)?)
            .await
    }

    pub async fn get_team(&self, team_id: i64) -> Result<Team> {
        self.get_json("team", self.api_request(&endpoints::team(team_id))?)
            .await
    }

    pub async fn get_venues(&self, page: Page) -> Result<Vec<Venue>> {
        let request = paged(self.api_request(endpoints::VENUES)?, page);
        self.get_json("venues", request).await
    }

    pub async fn get_venue(&self, venue_id: i64) -> Result<Venue> {
        self.get_json("venue", self.api_request(&endpoints::venue(venue_id))?)
            .await
    }

    // ---- seasons & fixtures ----

    pub async fn get_seasons(&self, page: Page) -> Result<Vec<Season>> {
        let request = paged(self.api_request(endpoints::SEASONS)?, page);
        self.get_json("seasons", request).await
    }

    pub async fn get_season(&self, season_id: i64) -> Result<Season> {
        self.get_json("season", self.api_request(&endpoints::season(season_id))?)
            .await
    }

    /// All fixtures, or only those of one season
    pub async fn get_fixtures(&self, season_id: Option<i64>, page: Page) -> Result<Vec<Fixture>> {
        let endpoint = match season_id {
            Some(id) => endpoints::season_fixtures(id),
            None => endpoints::FIXTURES.to_string(),
        };
        let request = paged(self.api_request(&endpoint)?, page);
        self.get_json("fixtures", request).await
    }

    // ---- rosters & transactions ----

    pub async fn get_rosters(&self) -> Result<Vec<Roster>> {
        self.get_json("rosters", self.api_request(endpoints::ROSTERS)?)
            .await
    }

    pub async fn get_roster(&self, roster_id: i64) -> Result<Roster> {
        self.get_json("roster", self.api_request(&endpoints::roster(roster_id))?)
            .await
    }

    /// Player movements recorded in a year
    pub async fn get_ledger(&self, year: i32) -> Result<Vec<LedgerTransaction>> {
        self.get_json("ledger", self.api_request(&endpoints::ledger(year))?)
            .await
    }

    // ---- statistics ----

    pub async fn get_team_stats(&self, season_id: Option<i32>) -> Result<Vec<TeamStats>> {
        let request = with_season(self.api_request(endpoints::TEAM_STATS)?, season_id);
        self.get_json("team stats", request).await
    }

    pub async fn get_team_stat(
        &self,
        team_stats_id: i64,
        season_id: Option<i32>,
    ) -> Result<TeamStats> {
        let request = with_season(
            self.api_request(&endpoints::team_stat(team_stats_id))?,
            season_id,
        );
        self.get_json("team stats", request).await
    }

    pub async fn get_player_stats(
        &self,
        season_id: Option<i32>,
        page: Page,
    ) -> Result<Vec<PlayerStats>> {
        let request = with_season(self.api_request(endpoints::PLAYER_STATS)?, season_id);
        self.get_json("player stats", paged(request, page)).await
    }

    pub async fn get_player_stat(&self, player_stats_id: i64) -> Result<PlayerStats> {
        let request = self.api_request(&endpoints::player_stat(player_stats_id))?;
        self.get_json("player stats", request).await
    }

    /// Look a player up by PIMS id and attach their photo URL
    ///
    /// The photo URL is only set when the API returned a record.
    pub async fn get_player_by_pims_id(&self, player_id: i64) -> Result<PlayerStats> {
        let request = self.api_request(&endpoints::pims_player(player_id))?;
        let payload = self.fetch_payload(request).await?;

        if is_empty_payload(&payload) {
            return Ok(PlayerStats::default());
        }

        let mut player: PlayerStats = decode_payload("player", payload)?;
        player.photo_url = Some(player_photo_url(player_id));
        Ok(player)
    }

    // ---- scraped pages ----

    /// Division standings for a year
    ///
    /// # Errors
    ///
    /// Only `Error::SeasonOutOfRange`, raised before any request. A page
    /// that cannot be fetched yields empty divisions.
    pub async fn get_standings(&self, year: i32) -> Result<Standings> {
        endpoints::validate_season(year)?;

        let url = endpoints::standings_page(&self.web_url, year);
        Ok(match self.fetch_page(RawRequest::get(url)).await {
            Some(html) => extract_standings(&html),
            None => Standings::default(),
        })
    }

    // ---- plumbing ----

    fn api_request(&self, endpoint: &str) -> Result<RawRequest> {
        let url = self
            .api_root
            .join(endpoint)
            .map_err(|e| Error::config(format!("Invalid endpoint '{endpoint}': {e}")))?;
        Ok(RawRequest::get(url.as_str()))
    }

    async fn fetch_payload(&self, request: RawRequest) -> Result<serde_json::Value> {
        let outcome = self.transport.request(request).await;
        Ok(classify(outcome)?)
    }

    async fn get_json<T>(&self, resource: &'static str, request: RawRequest) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let payload = self.fetch_payload(request).await?;
        decode_payload(resource, payload)
    }

    /// Body of an HTML page, or `None` on any failure or non-200 status
    /// Body of a scraped page; anything but a plain 200 counts as a failed fetch
    async fn fetch_page(&self, request: RawRequest) -> Option<String> {
        let url = request.url.clone();
        match self.transport.request(request).await {
            Ok(response) if response.status == 200 => Some(response.body),
            Ok(response) => {
                tracing::warn!(url = %url, status = response.status, "Unexpected status for page");
                None
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Failed to fetch page");
                None
            }
        }
    }
}

fn validate_config(config: &Config) -> Result<()> {
    config
        .validate()
        .map_err(|e| Error::config(format!("{e:#}")))
}

fn paged(request: RawRequest, page: Page) -> RawRequest {
    request.query("page", page.page).query("limit", page.limit)
}

fn with_season(request: RawRequest, season_id: Option<i32>) -> RawRequest {
    match season_id {
        Some(season) => request.query("season_id", season),
        None => request,
    }
}
