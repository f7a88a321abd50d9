//! Integration tests for the blocking client
//!
//! The mock server needs a runtime of its own, so each test starts one and
//! then calls the blocking client from different scheduling contexts.

mod common;

use cfl::client::blocking::CflClient;
use cfl::error::ApiFault;
use common::{leaderboard_html, mock_config};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn teams_server() -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"ID": 7, "name": "Elks"}])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/teams/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    mock_server
}

/// Inside a multi-thread runtime the caller's runtime is reused
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_blocking_inside_multi_thread_runtime() {
    let mock_server = teams_server().await;
    let client = CflClient::with_config(&mock_config(&mock_server)).unwrap();

    let teams = client.get_teams().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].name, "Elks");

    let err = client.get_team(404).unwrap_err();
    assert!(matches!(err.as_fault(), Some(ApiFault::NotFound { .. })));
}

/// Inside a current-thread runtime the call runs on a helper thread
#[tokio::test(flavor = "current_thread")]
async fn test_blocking_inside_current_thread_runtime() {
    let mock_server = teams_server().await;
    let client = CflClient::with_config(&mock_config(&mock_server)).unwrap();

    let teams = client.get_teams().unwrap();
    assert_eq!(teams[0].id, 7);
}

/// Outside any runtime a temporary one is created per call
#[test]
fn test_blocking_without_runtime() {
    let server_runtime = tokio::runtime::Runtime::new().unwrap();
    let mock_server = server_runtime.block_on(async {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/league-leaders"))
            .respond_with(ResponseTemplate::new(200).set_body_string(leaderboard_html("Sacks", 2)))
            .mount(&mock_server)
            .await;
        mock_server
    });

    let client = CflClient::with_config(&mock_config(&mock_server)).unwrap();

    let leaders = client.get_leaderboards(2024).unwrap();
    assert_eq!(leaders.defence["SACKS"].len(), 2);
    // Same page served for every category; only the defence catalogue knows "Sacks"
    assert!(leaders.offence.is_empty());

    // A second call gets its own runtime
    let again = client.get_leaderboards(2024).unwrap();
    assert_eq!(again, leaders);

    server_runtime.block_on(async move { drop(mock_server) });
}
