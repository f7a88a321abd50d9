//! CSS selectors for the scraped standings and leaderboard pages

use lazy_static::lazy_static;
use scraper::Selector;

// Helper macro to parse selectors safely at compile time
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    // Standings tables
    static ref TABLE: Selector = parse_selector!("table");
    static ref TABLE_HEAD: Selector = parse_selector!("thead");
    static ref TABLE_BODY: Selector = parse_selector!("tbody");
    static ref HEADER_CELL: Selector = parse_selector!("th");
    static ref ROW: Selector = parse_selector!("tr");
    static ref CELL: Selector = parse_selector!("td");
    static ref ANCHOR: Selector = parse_selector!("a");

    // Leaderboard blocks
    static ref LEADER_BLOCK: Selector = parse_selector!(".leaders-block, .stat-leaders");
    static ref BLOCK_TITLE: Selector = parse_selector!("h2, h3, h4, .stat-title");
    static ref LEADER_ENTRY: Selector = parse_selector!("li, tr");
    static ref PLAYER_LINK: Selector =
        parse_selector!("a[data-player-id], a[href*='/players/'], a.player-name");
    static ref TEAM: Selector = parse_selector!("[data-team], .team-abbreviation, .team");
    static ref VALUE: Selector = parse_selector!("[data-value], .stat-value, .value");
}

/// Selectors for the division standings tables
pub struct StandingsSelectors {
    pub table: &'static Selector,
    pub head: &'static Selector,
    pub body: &'static Selector,
    pub header_cell: &'static Selector,
    pub row: &'static Selector,
    pub cell: &'static Selector,
    pub anchor: &'static Selector,
}

impl StandingsSelectors {
    pub fn new() -> Self {
        Self {
            table: &TABLE,
            head: &TABLE_HEAD,
            body: &TABLE_BODY,
            header_cell: &HEADER_CELL,
            row: &ROW,
            cell: &CELL,
            anchor: &ANCHOR,
        }
    }
}

impl Default for StandingsSelectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Selectors for per-statistic leader blocks
pub struct LeaderboardSelectors {
    pub block: &'static Selector,
    pub title: &'static Selector,
    pub entry: &'static Selector,
    pub player_link: &'static Selector,
    pub team: &'static Selector,
    pub value: &'static Selector,
}

impl LeaderboardSelectors {
    pub fn new() -> Self {
        Self {
            block: &LEADER_BLOCK,
            title: &BLOCK_TITLE,
            entry: &LEADER_ENTRY,
            player_link: &PLAYER_LINK,
            team: &TEAM,
            value: &VALUE,
        }
    }
}

impl Default for LeaderboardSelectors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        let _ = StandingsSelectors::new();
        let _ = LeaderboardSelectors::default();
    }

    #[test]
    fn test_player_link_matches_variants() {
        let selectors = LeaderboardSelectors::new();
        let html = Html::parse_fragment(
            r#"<a href="/players/a/1/">A</a><a data-player-id="2">B</a><a class="player-name">C</a><a href="/teams/bc">D</a>"#,
        );
        assert_eq!(html.select(selectors.player_link).count(), 3);
    }
}
