//! Team and player statistics
//!
//! Stat lines carry well over a hundred camelCase counters and the set
//! differs between season totals and per-game lines. The identity fields
//! are typed; the counters are kept in a [`StatLine`] and read through
//! accessors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::Metadata;

/// Named numeric counters, e.g. `passesYards` or `fieldGoalsSucceededPercentage`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct StatLine(pub BTreeMap<String, Value>);

impl StatLine {
    /// Integer counter; decimal values are rejected
    pub fn counter(&self, name: &str) -> Option<i64> {
        self.0.get(name)?.as_i64()
    }

    /// Any numeric value as a float (averages, percentages, ratings)
    pub fn ratio(&self, name: &str) -> Option<f64> {
        self.0.get(name)?.as_f64()
    }

    /// Raw string value, e.g. `timeOfPossession`
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Season totals for one team
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SeasonTeamStats {
    pub season: i32,
    pub season_id: i64,
    pub team_id: i64,
    pub team_abbreviation: Option<String>,
    pub opponent_team_abbreviation: Option<String>,
    pub opponent_team_id: Option<i64>,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl SeasonTeamStats {
    pub fn points_scored(&self) -> Option<i64> {
        self.stats.counter("pointsScored")
    }

    pub fn points_allowed(&self) -> Option<i64> {
        self.stats.counter("pointsAllowed")
    }

    pub fn touchdowns(&self) -> Option<i64> {
        self.stats.counter("touchdowns")
    }

    pub fn offense_yards(&self) -> Option<i64> {
        self.stats.counter("offenseYards")
    }
}

/// One team's line for a single game
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FixtureTeamStats {
    pub fixture_id: i64,
    pub genius_id: Option<i64>,
    pub season: Option<i32>,
    pub season_id: i64,
    pub week: Option<i64>,
    pub start_at: Option<String>,
    pub stats: StatLine,
}

/// Statistics record for one team
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TeamStats {
    #[serde(rename = "ID")]
    pub id: i64,
    pub abbreviation: String,
    pub last_game_id: Option<i64>,
    pub name: String,
    pub region_label: String,
    pub team_id: i64,
    pub seasons: Vec<SeasonTeamStats>,
    pub fixtures: Vec<FixtureTeamStats>,
    pub metadata: Option<Metadata>,
}

impl TeamStats {
    /// Season totals for a given year
    pub fn season(&self, year: i32) -> Option<&SeasonTeamStats> {
        self.seasons.iter().find(|s| s.season == year)
    }
}

/// Season totals for one player
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SeasonPlayerStats {
    #[serde(rename = "hasParticipated")]
    pub has_participated: Option<i64>,
    #[serde(rename = "wasStarter")]
    pub was_starter: Option<i64>,
    pub season: i32,
    pub season_id: i64,
    pub team_abbreviation: Option<String>,
    pub team_id: Option<i64>,
    pub opponent_team_abbreviation: Option<String>,
    pub opponent_team_id: Option<i64>,
    #[serde(flatten)]
    pub stats: StatLine,
}

impl SeasonPlayerStats {
    pub fn passing_yards(&self) -> Option<i64> {
        self.stats.counter("passesSucceededYards")
    }

    pub fn rushing_yards(&self) -> Option<i64> {
        self.stats.counter("rushingYards")
    }

    pub fn receiving_yards(&self) -> Option<i64> {
        self.stats.counter("receptionsYards")
    }

    pub fn tackles(&self) -> Option<i64> {
        self.stats.counter("tackles")
    }
}

/// One player's line for a single game
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FixturePlayerStats {
    pub fixture_id: i64,
    pub genius_id: Option<i64>,
    pub season: Option<i32>,
    pub season_id: i64,
    pub week: Option<i64>,
    pub start_at: Option<String>,
    pub team_id: i64,
    pub team_abbreviation: Option<String>,
    pub opponent_team_id: i64,
    pub opponent_team_abbreviation: Option<String>,
    pub stats: StatLine,
}

/// Statistics record for one player
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PlayerStats {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    pub player_id: i64,
    pub rosterplayer_id: Option<i64>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub team_id: Option<i64>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub last_game_id: Option<i64>,
    pub seasons: Vec<SeasonPlayerStats>,
    pub fixtures: Vec<FixturePlayerStats>,
    pub metadata: Option<Metadata>,

    // Derived from `player_id` for lookups by PIMS id; never sent by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl PlayerStats {
    pub fn season(&self, year: i32) -> Option<&SeasonPlayerStats> {
        self.seasons.iter().find(|s| s.season == year)
    }
}
