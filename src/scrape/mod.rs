//! HTML extraction for the pages the JSON API does not cover
//!
//! Standings and league leaders are only published as web pages. Both
//! extractors are best effort: they never fail, and markup they cannot make
//! sense of simply produces fewer (or no) records.

pub mod leaderboard;
pub mod selectors;
pub mod standings;

pub use leaderboard::{parse_leaderboard_category, LeaderboardParser};
pub use standings::{extract_standings, StandingsParser};
