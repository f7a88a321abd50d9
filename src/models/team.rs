use serde::{Deserialize, Serialize};

use super::{Genius, Location, Metadata};

/// A league club
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Team {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub region_label: String,
    pub abbreviation: String,
    pub team_zone: String, // WEST or EAST
    pub time_zone: String,
    pub primary_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub team_order: i64,
    pub logo_svg: String,
    pub office_location: Option<Location>,
    pub clubname: String,
    pub default_venue_id: Option<i64>,
    pub genius: Option<Genius>,
    pub metadata: Option<Metadata>,
}

/// A stadium
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Venue {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub capacity: Option<i64>,
    pub grey_cup_capacity: Option<i64>,
    pub time_zone: String,
    pub office_location: Option<Location>,
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserialize() {
        let json = r##"{
            "ID": 3,
            "name": "Roughriders",
            "region_label": "Saskatchewan",
            "abbreviation": "SSK",
            "team_zone": "WEST",
            "primary_color": "#006341",
            "office_location": {"city": "Regina", "country": "CA"},
            "clubname": "Saskatchewan Roughriders",
            "default_venue_id": 7,
            "metadata": {"created_at": "2023-01-01T00:00:00Z", "revision": 4}
        }"##;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.id, 3);
        assert_eq!(team.abbreviation, "SSK");
        assert_eq!(team.default_venue_id, Some(7));
        assert_eq!(
            team.office_location.unwrap().city.as_deref(),
            Some("Regina")
        );
        assert_eq!(team.metadata.unwrap().revision, Some(4));
    }

    #[test]
    fn test_venue_null_capacity() {
        let venue: Venue =
            serde_json::from_str(r#"{"ID": 1, "name": "BC Place", "grey_cup_capacity": null}"#)
                .unwrap();
        assert_eq!(venue.name, "BC Place");
        assert!(venue.grey_cup_capacity.is_none());
    }
}
