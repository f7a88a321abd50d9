use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Genius, Location, Metadata};

/// A league season and its week layout
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Season {
    #[serde(rename = "ID")]
    pub id: i64,
    pub year: i32,
    pub preseason_weeks: Vec<String>,
    pub season_weeks: Vec<String>,
    pub semi_final_weeks: Vec<String>,
    pub final_weeks: Vec<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub grey_cup_final_week: Option<String>,
    pub metadata: Option<Metadata>,
}

/// Venue details embedded in a fixture
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FixtureVenue {
    #[serde(rename = "ID")]
    pub id: Option<i64>,
    pub name: Option<String>,
    pub capacity: Option<i64>,
    pub grey_cup_capacity: Option<i64>,
    pub media_entrance_gate: Option<String>,
    pub press_box: Option<String>,
    pub home_dressing_room: Option<String>,
    pub away_dressing_room: Option<String>,
    pub radio_station: Option<String>,
    pub time_zone: Option<String>,
    pub office_location: Option<Location>,
    pub ticket_office_location: Option<Location>,
    pub genius: Option<Genius>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FixtureRelations {
    pub venue: Option<FixtureVenue>,
}

/// A single scheduled game
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Fixture {
    #[serde(rename = "ID")]
    pub id: i64,
    pub season_id: Option<i64>,
    pub season_game_count: Option<i64>,
    pub home_team_id: Option<i64>,
    pub home_game_count: Option<i64>,
    pub away_team_id: Option<i64>,
    pub week: Option<i64>,
    pub game_type_id: Option<i64>,
    pub start_at_local: Option<String>,
    pub venue_id: Option<i64>,
    pub start_at: Option<String>,
    pub relations: Option<FixtureRelations>,
    pub metadata: Option<Metadata>,
}

impl Fixture {
    /// Kickoff time parsed from `start_at`
    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.start_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z"))
            .ok()
    }

    /// Whether neither side has been scheduled yet (e.g. playoff placeholders)
    pub fn is_placeholder(&self) -> bool {
        self.home_team_id.is_none() && self.away_team_id.is_none()
    }
}
