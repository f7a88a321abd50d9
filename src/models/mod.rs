// Data-transfer schemas for API resources and scraped pages

pub mod leaders;
pub mod roster;
pub mod season;
pub mod standings;
pub mod stats;
pub mod team;

pub use leaders::{
    CategoryLeaders, LeaderboardEntry, LeagueLeaders, StatCategory, StatDefinition, StatKind,
    StatValue, MAX_LEADERS,
};
pub use roster::{LedgerTransaction, Roster, RosterPlayer};
pub use season::{Fixture, FixtureRelations, FixtureVenue, Season};
pub use standings::{Division, Standings, StandingsRow};
pub use stats::{
    FixturePlayerStats, FixtureTeamStats, PlayerStats, SeasonPlayerStats, SeasonTeamStats,
    StatLine, TeamStats,
};
pub use team::{Team, Venue};

use serde::{Deserialize, Serialize};

/// Default page number for paginated endpoints
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for paginated endpoints
pub const DEFAULT_LIMIT: u32 = 50;

/// Revision bookkeeping attached to most resources
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Metadata {
    pub created_at: Option<String>,
    pub revision_at: Option<String>,
    pub revision: Option<i64>,
}

/// Postal address
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Location {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub prov_state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

/// Upstream stats-provider sync status
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Genius {
    pub id: Option<i64>,
    pub error: Option<String>,
    pub messages: Vec<serde_json::Value>,
    pub last_update: Option<String>,
}

/// Page selection for paginated endpoints
///
/// Pages are 1-based. There is no "has more" indicator; keep paging until
/// an empty page comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// The page after this one, same size
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}
