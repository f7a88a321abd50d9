//! Common test utilities

use cfl::client::CflClient;
use cfl::config::Config;
use wiremock::MockServer;

/// Config pointing every URL at the mock server
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.web_url = server.uri();
    config.api.leaderboard_url = format!("{}/league-leaders", server.uri());
    config.api.request_timeout_ms = 2_000;
    config.api.user_agent = Some("cfl-tests/0.1".to_string());
    config
}

/// Async client against the mock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> CflClient {
    CflClient::with_config(&mock_config(server)).expect("client should build")
}

/// Standings page with a WEST and an EAST table; EAST carries one malformed row
#[allow(dead_code)]
pub const STANDINGS_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Standings</title></head>
<body>
  <h2>West Division</h2>
  <table class="standings">
    <thead><tr><th>RK</th><th>TEAM</th><th>GP</th><th>W</th><th>L</th><th>PTS</th></tr></thead>
    <tbody>
      <tr><td>1</td><td><a href="/teams/winnipeg">Winnipeg</a><span class="clinch">x</span></td><td>18</td><td>11</td><td>7</td><td>22</td></tr>
      <tr><td>2</td><td><a href="/teams/saskatchewan">Saskatchewan</a></td><td>18</td><td>9</td><td>8</td><td>19</td></tr>
      <tr><td>3</td><td><a href="/teams/bc">BC</a></td><td>18</td><td>9</td><td>9</td><td>18</td></tr>
    </tbody>
  </table>
  <h2>East Division</h2>
  <table class="standings">
    <thead><tr><th>RK</th><th>TEAM</th><th>GP</th><th>W</th><th>L</th><th>PTS</th></tr></thead>
    <tbody>
      <tr><td>1</td><td><a href="/teams/montreal">Montreal</a></td><td>18</td><td>12</td><td>5</td><td>25</td></tr>
      <tr><td colspan="6">Clinched playoff spot</td></tr>
      <tr><td>2</td><td><a href="/teams/toronto">Toronto</a></td><td>18</td><td>10</td><td>8</td><td>20</td></tr>
    </tbody>
  </table>
</body>
</html>"#;

/// Leaderboard page for one statistic block with `count` entries
#[allow(dead_code)]
pub fn leaderboard_html(stat: &str, count: u32) -> String {
    let entries: String = (1..=count)
        .map(|i| {
            format!(
                r#"<li class="leader"><span class="rank">{rank}</span><a href="/players/player-{i}/{id}/">Player {i}</a><span class="team-abbreviation">WPG</span><span class="stat-value">{value}</span></li>"#,
                rank = i * 10,
                id = 1000 + i,
                value = 2000 - i * 100,
            )
        })
        .collect();

    format!(
        r#"<html><body><div class="leaders-block"><h3 class="stat-title">{stat}</h3><ol>{entries}</ol></div></body></html>"#
    )
}
