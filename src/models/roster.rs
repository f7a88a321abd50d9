use serde::{Deserialize, Serialize};

use super::Metadata;

/// The players attached to a team
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Roster {
    #[serde(rename = "ID")]
    pub id: i64,
    pub team_id: i64,
    pub name: String,
    pub rosterplayers: Vec<RosterPlayer>,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RosterPlayer {
    #[serde(rename = "ID")]
    pub id: i64,
    pub player_id: i64,
    pub firstname: String,
    pub lastname: String,
    pub jersey_no: Option<i64>,
    pub birthdate: Option<String>,
    pub height_ft: Option<i64>,
    pub height_in: Option<i64>,
    pub weight_lbs: Option<i64>,
    pub college_id: Option<i64>,
    pub college: Option<String>,
    pub position: String,
    pub return_from_injury_date: Option<String>,
    pub return_to_practice_date: Option<String>,
    pub state: String, // active, injured, practice, ...
    pub available_roster: bool,
    pub no_set: bool,
    pub team_id: Vec<i64>,
    pub teams: Vec<String>,
    pub files: Vec<serde_json::Value>,
    pub metadata: Option<Metadata>,
}

impl RosterPlayer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// A recorded player movement (signing, release, ...)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LedgerTransaction {
    pub transaction_id: i64,
    pub description: String,
    pub accepted_at: Option<String>,
    pub distributed_at: Option<String>,
    pub firstname: String,
    pub lastname: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub college: Option<String>,
    pub team_abbr: Option<String>,
    pub action: String,
    pub is_distributed: bool,
    pub player_id: i64,
    pub resource_type: Option<String>,
    pub state_change: Option<String>,
    pub previous_state: Option<String>,
}
