//! Endpoint paths and supported season range

use url::Url;

use crate::error::{Error, Result};

/// First season with published standings and leaders
pub const MIN_SEASON: i32 = 2023;

/// Last supported season
pub const MAX_SEASON: i32 = 2025;

/// Season used when the caller does not pick one
pub const DEFAULT_SEASON: i32 = 2024;

pub const TEAMS: &str = "teams";
pub const VENUES: &str = "venues";
pub const SEASONS: &str = "seasons";
pub const FIXTURES: &str = "fixtures";
pub const ROSTERS: &str = "rosters";
pub const TEAM_STATS: &str = "stats/teams";
pub const PLAYER_STATS: &str = "stats/players";

pub fn team(team_id: i64) -> String {
    format!("{TEAMS}/{team_id}")
}

pub fn venue(venue_id: i64) -> String {
    format!("{VENUES}/{venue_id}")
}

pub fn season(season_id: i64) -> String {
    format!("{SEASONS}/{season_id}")
}

pub fn season_fixtures(season_id: i64) -> String {
    format!("{SEASONS}/{season_id}/{FIXTURES}")
}

pub fn roster(roster_id: i64) -> String {
    format!("{ROSTERS}/{roster_id}")
}

pub fn ledger(year: i32) -> String {
    format!("ledger/{year}")
}

pub fn team_stat(team_stats_id: i64) -> String {
    format!("{TEAM_STATS}/{team_stats_id}")
}

pub fn player_stat(player_stats_id: i64) -> String {
    format!("{PLAYER_STATS}/{player_stats_id}")
}

pub fn pims_player(player_id: i64) -> String {
    format!("{PLAYER_STATS}/pims_player/{player_id}")
}

/// Root that endpoint paths are joined onto: `{base_url}/api/`
///
/// # Errors
///
/// Returns `Error::Config` if `base_url` is not an absolute URL
pub fn api_root(base_url: &str) -> Result<Url> {
    let root = format!("{}/api/", base_url.trim_end_matches('/'));
    Url::parse(&root).map_err(|e| Error::config(format!("Invalid base_url '{base_url}': {e}")))
}

/// Standings page for a year
pub fn standings_page(web_url: &str, year: i32) -> String {
    format!("{}/standings/{year}", web_url.trim_end_matches('/'))
}

/// Reject seasons outside `[MIN_SEASON, MAX_SEASON]`
///
/// # Errors
///
/// Returns `Error::SeasonOutOfRange`
pub fn validate_season(season: i32) -> Result<()> {
    if (MIN_SEASON..=MAX_SEASON).contains(&season) {
        Ok(())
    } else {
        Err(Error::SeasonOutOfRange {
            season,
            min: MIN_SEASON,
            max: MAX_SEASON,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CflErrorTrait;

    #[test]
    fn test_api_root_join() {
        let root = api_root("https://echo.pims.cfl.ca").unwrap();
        assert_eq!(
            root.join(&team(7)).unwrap().as_str(),
            "https://echo.pims.cfl.ca/api/teams/7"
        );

        let root = api_root("http://localhost:8080/proxy/").unwrap();
        assert_eq!(
            root.join(&pims_player(160923)).unwrap().as_str(),
            "http://localhost:8080/proxy/api/stats/players/pims_player/160923"
        );
    }

    #[test]
    fn test_api_root_rejects_relative() {
        assert!(api_root("echo.pims.cfl.ca").is_err());
    }

    #[test]
    fn test_paths() {
        assert_eq!(season_fixtures(12), "seasons/12/fixtures");
        assert_eq!(ledger(2024), "ledger/2024");
        assert_eq!(team_stat(3), "stats/teams/3");
        assert_eq!(player_stat(9), "stats/players/9");
        assert_eq!(
            standings_page("https://www.cfl.ca/", 2024),
            "https://www.cfl.ca/standings/2024"
        );
    }

    #[test]
    fn test_validate_season_bounds() {
        assert!(validate_season(MIN_SEASON).is_ok());
        assert!(validate_season(DEFAULT_SEASON).is_ok());
        assert!(validate_season(MAX_SEASON).is_ok());

        for season in [2022, 2026, 0, -1] {
            let err = validate_season(season).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.status(), None);
        }
    }
}
