// League leaders scraped from the leaderboard pages

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum ranked entries kept per statistic
pub const MAX_LEADERS: usize = 5;

/// Top-level leaderboard grouping; one page per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatCategory {
    Offence,
    Defence,
    SpecialTeams,
}

impl StatCategory {
    pub const ALL: [StatCategory; 3] = [Self::Offence, Self::Defence, Self::SpecialTeams];

    /// Value of the `stat_category` query parameter
    pub fn query_value(&self) -> &'static str {
        match self {
            Self::Offence => "offence",
            Self::Defence => "defence",
            Self::SpecialTeams => "special_teams",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offence => "OFFENCE",
            Self::Defence => "DEFENCE",
            Self::SpecialTeams => "SPECIAL_TEAMS",
        }
    }

    /// Statistics published on this category's page
    pub fn statistics(&self) -> &'static [StatDefinition] {
        match self {
            Self::Offence => OFFENCE_STATS,
            Self::Defence => DEFENCE_STATS,
            Self::SpecialTeams => SPECIAL_TEAMS_STATS,
        }
    }

    /// Look up a statistic by key, label, or alias (case and punctuation insensitive)
    pub fn find_statistic(&self, text: &str) -> Option<&'static StatDefinition> {
        let wanted = normalize_label(text);
        if wanted.is_empty() {
            return None;
        }
        self.statistics().iter().find(|def| def.matches(&wanted))
    }

    /// Accepts `offence`, `OFFENCE`, `special-teams`, `special_teams`, `st`, ...
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_label(s).as_str() {
            "offence" | "offense" => Some(Self::Offence),
            "defence" | "defense" => Some(Self::Defence),
            "specialteams" | "st" => Some(Self::SpecialTeams),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a statistic's value is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Counting stats: yards, touchdowns, tackles
    Integer,
    /// Averages and percentages
    Decimal,
}

/// A statistic published on a leaderboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatDefinition {
    pub key: &'static str,
    pub kind: StatKind,
    /// Headings the page has been seen to use for this statistic
    pub labels: &'static [&'static str],
}

impl StatDefinition {
    const fn new(key: &'static str, kind: StatKind, labels: &'static [&'static str]) -> Self {
        Self { key, kind, labels }
    }

    fn matches(&self, normalized: &str) -> bool {
        normalize_label(self.key) == normalized
            || self.labels.iter().any(|l| normalize_label(l) == normalized)
    }
}

/// Lowercase, alphanumerics only
fn normalize_label(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

use StatKind::{Decimal, Integer};

static OFFENCE_STATS: &[StatDefinition] = &[
    StatDefinition::new("PASSING_YARDS", Integer, &["Passing Yards", "Pass Yards"]),
    StatDefinition::new("PASSING_TDS", Integer, &["Passing Touchdowns", "Passing TD"]),
    StatDefinition::new("RUSHING_YARDS", Integer, &["Rushing Yards", "Rush Yards"]),
    StatDefinition::new("RUSHING_TDS", Integer, &["Rushing Touchdowns", "Rushing TD"]),
    StatDefinition::new("RECEIVING_YARDS", Integer, &["Receiving Yards"]),
    StatDefinition::new("RECEIVING_TDS", Integer, &["Receiving Touchdowns", "Receiving TD"]),
    StatDefinition::new("RECEPTIONS", Integer, &["Receptions"]),
    StatDefinition::new("TARGETS", Integer, &["Targets"]),
];

static DEFENCE_STATS: &[StatDefinition] = &[
    StatDefinition::new("TOTAL_TACKLES", Integer, &["Total Tackles", "Tackles"]),
    StatDefinition::new("SACKS", Integer, &["Sacks"]),
    StatDefinition::new("INTERCEPTIONS", Integer, &["Interceptions"]),
    StatDefinition::new("FORCED_FUMBLES", Integer, &["Forced Fumbles"]),
    StatDefinition::new("FUMBLE_RECOVERIES", Integer, &["Fumble Recoveries"]),
];

static SPECIAL_TEAMS_STATS: &[StatDefinition] = &[
    StatDefinition::new("FIELD_GOALS", Integer, &["Field Goals", "Field Goals Made"]),
    StatDefinition::new(
        "PUNTING_YARDS_AVG",
        Decimal,
        &["Punting Average", "Punting Yards Average", "Punt Average"],
    ),
    StatDefinition::new("PUNT_RETURNS_YARDS", Integer, &["Punt Return Yards", "Punt Returns"]),
    StatDefinition::new(
        "KICKOFF_RETURNS_YARDS",
        Integer,
        &["Kickoff Return Yards", "Kickoff Returns"],
    ),
    StatDefinition::new(
        "FIELD_GOAL_MISS_RETURNS_YARDS",
        Integer,
        &["Missed Field Goal Return Yards", "Missed Field Goal Returns"],
    ),
    StatDefinition::new(
        "KICKOFFS_YARDS_AVG",
        Decimal,
        &["Kickoff Average", "Kickoff Yards Average"],
    ),
    StatDefinition::new("KICKS_BLOCKED", Integer, &["Kicks Blocked", "Blocked Kicks"]),
    StatDefinition::new(
        "TACKLES_SPECIAL_TEAMS",
        Integer,
        &["Special Teams Tackles", "Tackles Special Teams"],
    ),
];

/// A leaderboard value, integer or decimal depending on the statistic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Decimal(f64),
}

impl StatValue {
    /// Parse a displayed value such as `4,769`, `47.3` or `88.2%`
    pub fn parse(raw: &str, kind: StatKind) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '%')
            .collect();

        if cleaned.is_empty() {
            return None;
        }

        match kind {
            StatKind::Integer => match cleaned.parse::<i64>() {
                Ok(n) => Some(Self::Integer(n)),
                Err(_) => {
                    let f = cleaned.parse::<f64>().ok()?;
                    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
                    (in_range && f.fract() == 0.0).then(|| Self::Integer(f as i64))
                }
            },
            StatKind::Decimal => cleaned
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Self::Decimal),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Decimal(f) => *f,
        }
    }
}

/// One ranked player in a statistic's leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32, // 1-based, assigned by position on the page
    pub player_id: String,
    pub player_name: String,
    pub team_abbreviation: String,
    pub value: StatValue,
    pub photo_url: String,
}

/// Statistic key -> ranked entries
pub type CategoryLeaders = BTreeMap<String, Vec<LeaderboardEntry>>;

/// League leaders for every category
///
/// A category whose page could not be fetched is present but empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueLeaders {
    #[serde(rename = "OFFENCE")]
    pub offence: CategoryLeaders,
    #[serde(rename = "DEFENCE")]
    pub defence: CategoryLeaders,
    #[serde(rename = "SPECIAL_TEAMS")]
    pub special_teams: CategoryLeaders,
}

impl LeagueLeaders {
    pub fn category(&self, category: StatCategory) -> &CategoryLeaders {
        match category {
            StatCategory::Offence => &self.offence,
            StatCategory::Defence => &self.defence,
            StatCategory::SpecialTeams => &self.special_teams,
        }
    }

    pub fn set_category(&mut self, category: StatCategory, leaders: CategoryLeaders) {
        match category {
            StatCategory::Offence => self.offence = leaders,
            StatCategory::Defence => self.defence = leaders,
            StatCategory::SpecialTeams => self.special_teams = leaders,
        }
    }

    /// Entries for one statistic, empty if the statistic is absent
    pub fn statistic(&self, category: StatCategory, key: &str) -> &[LeaderboardEntry] {
        self.category(category)
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.offence.is_empty() && self.defence.is_empty() && self.special_teams.is_empty()
    }
}
