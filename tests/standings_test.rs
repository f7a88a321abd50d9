//! Integration tests for standings scraping

mod common;

use cfl::models::Division;
use common::{mock_client, STANDINGS_HTML};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_standings_page_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings/2024"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STANDINGS_HTML))
        .expect(1)
        .mount(&mock_server)
        .await;

    let standings = mock_client(&mock_server).get_standings(2024).await.unwrap();

    let west: Vec<_> = standings.west.iter().filter_map(|r| r.get("TEAM")).collect();
    assert_eq!(west, vec!["Winnipeg", "Saskatchewan", "BC"]);

    // Colspan note row dropped, the rows around it kept
    let east: Vec<_> = standings.east.iter().filter_map(|r| r.get("TEAM")).collect();
    assert_eq!(east, vec!["Montreal", "Toronto"]);

    assert!(standings.west.iter().all(|r| r.division == Division::West));
    assert_eq!(standings.east[0].get("PTS"), Some("25"));
}

#[tokio::test]
async fn test_standings_serialize_by_division() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings/2023"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STANDINGS_HTML))
        .mount(&mock_server)
        .await;

    let standings = mock_client(&mock_server).get_standings(2023).await.unwrap();
    let json = serde_json::to_value(&standings).unwrap();

    assert_eq!(json["WEST"][0]["TEAM"], "Winnipeg");
    assert_eq!(json["WEST"][0]["division"], "WEST");
    assert_eq!(json["EAST"][1]["W"], "10");
}

#[tokio::test]
async fn test_standings_server_error_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings/2025"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let standings = mock_client(&mock_server).get_standings(2025).await.unwrap();

    assert!(standings.west.is_empty());
    assert!(standings.east.is_empty());
}

#[tokio::test]
async fn test_standings_page_without_tables() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings/2024"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>Coming soon</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let standings = mock_client(&mock_server).get_standings(2024).await.unwrap();

    assert!(standings.is_empty());
}

#[tokio::test]
async fn test_standings_year_out_of_range_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(STANDINGS_HTML))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);

    for year in [2022, 2026] {
        let err = client.get_standings(year).await.unwrap_err();
        assert!(err.is_validation(), "{year}: {err}");
    }
}
