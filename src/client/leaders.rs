// League leaders fan-out: one page fetch per category, all three in flight at once

use futures::future::join_all;

use super::{endpoints, CflClient};
use crate::error::Result;
use crate::models::{CategoryLeaders, LeagueLeaders, StatCategory};
use crate::scrape::parse_leaderboard_category;
use crate::transport::RawRequest;

impl CflClient {
    /// League leaders for every category in a season
    ///
    /// The three category pages are fetched concurrently and every fetch
    /// is allowed to settle. A category whose page fails (transport error
    /// or non-200 status) is left empty; the others are still returned.
    ///
    /// # Errors
    ///
    /// Only `Error::SeasonOutOfRange`, raised before any request is sent
    pub async fn get_leaderboards(&self, season: i32) -> Result<LeagueLeaders> {
        endpoints::validate_season(season)?;

        let fetches = StatCategory::ALL
            .iter()
            .map(|&category| self.fetch_category(category, season));
        let results = join_all(fetches).await;

        let mut leaders = LeagueLeaders::default();
        for (category, result) in StatCategory::ALL.into_iter().zip(results) {
            match result {
                Some(stats) => leaders.set_category(category, stats),
                None => tracing::warn!(%category, season, "Leaderboard category unavailable"),
            }
        }

        tracing::info!(
            season,
            offence = leaders.offence.len(),
            defence = leaders.defence.len(),
            special_teams = leaders.special_teams.len(),
            "Fetched league leaders"
        );

        Ok(leaders)
    }

    async fn fetch_category(&self, category: StatCategory, season: i32) -> Option<CategoryLeaders> {
        let request = RawRequest::get(self.leaderboard_url.as_str())
            .query("stat_category", category.query_value())
            .query("season", season);

        let html = self.fetch_page(request).await?;
        Some(parse_leaderboard_category(&html, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::transport::{RawResponse, Transport, TransportError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const DEFENCE_PAGE: &str = r#"<div class="leaders-block" data-stat="SACKS">
        <ul><li><a href="/players/x/55/">Mathieu Betts</a><span class="team">BC</span><span class="value">14</span></li></ul>
    </div>"#;

    /// Serves the defence page, fails offence with a 500 and special teams with a timeout
    struct CategoryTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Transport for CategoryTransport {
        async fn request(
            &self,
            request: RawRequest,
        ) -> std::result::Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let category = request
                .query
                .iter()
                .find(|(k, _)| k == "stat_category")
                .map(|(_, v)| v.as_str());

            match category {
                Some("defence") => Ok(RawResponse::new(&request.url, 200, DEFENCE_PAGE)),
                Some("offence") => Ok(RawResponse::new(&request.url, 500, "boom")),
                _ => Err(TransportError::Timeout("slow".into())),
            }
        }
    }

    #[tokio::test]
    async fn test_failed_categories_left_empty() {
        let transport = Arc::new(CategoryTransport {
            calls: AtomicUsize::new(0),
        });
        let client = CflClient::with_transport(&Config::default(), transport.clone()).unwrap();

        let leaders = client.get_leaderboards(2024).await.unwrap();

        assert_eq!(transport.calls.load(Ordering::SeqCst), 3);
        assert!(leaders.offence.is_empty());
        assert!(leaders.special_teams.is_empty());
        let sacks = leaders.statistic(StatCategory::Defence, "SACKS");
        assert_eq!(sacks.len(), 1);
        assert_eq!(sacks[0].player_id, "55");
    }

    #[tokio::test]
    async fn test_out_of_range_season_sends_nothing() {
        let transport = Arc::new(CategoryTransport {
            calls: AtomicUsize::new(0),
        });
        let client = CflClient::with_transport(&Config::default(), transport.clone()).unwrap();

        let err = client.get_leaderboards(2026).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }
}
