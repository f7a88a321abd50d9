//! League leaders extraction
//!
//! A category page holds one block per statistic. Blocks are matched to the
//! category's catalogue by `data-stat`, falling back to heading text; blocks
//! naming an unknown statistic (including bare wrappers) are ignored. Ranks
//! are positional: whatever rank the page prints, the first kept entry is 1.

use scraper::{ElementRef, Html};

use crate::models::{
    CategoryLeaders, LeaderboardEntry, StatCategory, StatDefinition, StatValue, MAX_LEADERS,
};
use crate::scrape::selectors::LeaderboardSelectors;
use crate::utils::{normalize_whitespace, player_id_from_href, player_photo_url};

/// Extract every catalogued statistic from one category page
pub fn parse_leaderboard_category(html: &str, category: StatCategory) -> CategoryLeaders {
    LeaderboardParser::new().parse(html, category)
}

/// Parser for leaderboard category pages
pub struct LeaderboardParser {
    selectors: LeaderboardSelectors,
}

impl LeaderboardParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            selectors: LeaderboardSelectors::new(),
        }
    }

    pub fn parse(&self, html: &str, category: StatCategory) -> CategoryLeaders {
        let document = Html::parse_document(html);
        let mut leaders = CategoryLeaders::new();

        for block in document.select(self.selectors.block) {
            let Some(definition) = self.identify_statistic(&block, category) else {
                tracing::debug!(%category, "Skipping leaderboard block with unknown statistic");
                continue;
            };

            if leaders.contains_key(definition.key) {
                tracing::debug!(%category, stat = definition.key, "Duplicate leaderboard block");
                continue;
            }

            let entries = self.parse_block(&block, definition);
            tracing::debug!(
                %category,
                stat = definition.key,
                entries = entries.len(),
                "Parsed leaderboard block"
            );
            leaders.insert(definition.key.to_string(), entries);
        }

        leaders
    }

    fn identify_statistic(
        &self,
        block: &ElementRef,
        category: StatCategory,
    ) -> Option<&'static StatDefinition> {
        block
            .value()
            .attr("data-stat")
            .and_then(|stat| category.find_statistic(stat))
            .or_else(|| {
                block
                    .select(self.selectors.title)
                    .find(|title| self.owns(block, title))
                    .and_then(|title| category.find_statistic(&element_text(&title)))
            })
    }

    /// Whether `block` is the innermost leader block around `element`
    ///
    /// Blocks may be nested inside a wrapper that itself matches the block
    /// selector; headings and entries belong only to their closest block.
    fn owns(&self, block: &ElementRef, element: &ElementRef) -> bool {
        element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|ancestor| self.selectors.block.matches(ancestor))
            .is_some_and(|owner| owner.id() == block.id())
    }

    /// Up to [`MAX_LEADERS`] entries; unparsable entries are skipped without using up a rank
    fn parse_block(&self, block: &ElementRef, definition: &StatDefinition) -> Vec<LeaderboardEntry> {
        let mut entries = Vec::with_capacity(MAX_LEADERS);

        for candidate in block.select(self.selectors.entry) {
            if entries.len() == MAX_LEADERS {
                break;
            }
            if !self.owns(block, &candidate) {
                continue;
            }

            let Some(link) = candidate.select(self.selectors.player_link).next() else {
                continue;
            };

            let rank = entries.len() as u32 + 1;
            match self.parse_entry(&candidate, &link, definition, rank) {
                Some(entry) => entries.push(entry),
                None => tracing::debug!(stat = definition.key, "Skipping unparsable leader entry"),
            }
        }

        entries
    }

    fn parse_entry(
        &self,
        entry: &ElementRef,
        link: &ElementRef,
        definition: &StatDefinition,
        rank: u32,
    ) -> Option<LeaderboardEntry> {
        let player_id = entry
            .value()
            .attr("data-player-id")
            .or_else(|| link.value().attr("data-player-id"))
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .or_else(|| link.value().attr("href").and_then(player_id_from_href))?;

        let player_name = normalize_whitespace(&link.text().collect::<String>());
        if player_name.is_empty() {
            return None;
        }

        let team_abbreviation = entry
            .select(self.selectors.team)
            .next()
            .map(|team| attr_or_text(&team, "data-team"))
            .unwrap_or_default();

        let raw_value = entry
            .select(self.selectors.value)
            .next()
            .map(|value| attr_or_text(&value, "data-value"))?;
        let value = StatValue::parse(&raw_value, definition.kind)?;

        Some(LeaderboardEntry {
            rank,
            photo_url: player_photo_url(&player_id),
            player_id,
            player_name,
            team_abbreviation,
            value,
        })
    }
}

impl Default for LeaderboardParser {
    fn default() -> Self {
        Self::new()
    }
}

fn element_text(element: &ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

fn attr_or_text(element: &ElementRef, attr: &str) -> String {
    match element.value().attr(attr) {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => element_text(element),
    }
}
