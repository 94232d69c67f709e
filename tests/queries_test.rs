//! Caching properties of the public query API

use std::time::Duration;

use football_scout::{api::PlayerQueries, core::ApiClient, PlayerUuid, Season};
use url::Url;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const PLAYER_DETAIL: &str = include_str!("fixtures/player_detail.json");

async fn mount_detail(server: &MockServer, season: &str, delay_ms: u64, expected_calls: u64) {
    let body: serde_json::Value = serde_json::from_str(PLAYER_DETAIL).unwrap();
    Mock::given(method("GET"))
        .and(path("/player/p-0042/details"))
        .and(query_param("season", season))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(Duration::from_millis(delay_ms)),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn queries_for(server: &MockServer) -> PlayerQueries {
    let client = ApiClient::new(Url::parse(&server.uri()).unwrap()).unwrap();
    PlayerQueries::new(client)
}

#[tokio::test]
async fn test_same_key_within_window_is_one_request() {
    let server = MockServer::start().await;
    mount_detail(&server, "2024", 0, 1).await;

    let queries = queries_for(&server);
    let uuid = PlayerUuid::new("p-0042");

    for _ in 0..3 {
        let state = queries.player_details(&uuid, Season::new(2024)).await;
        assert!(state.data().is_some());
    }

    let (_, detail_stats) = queries.stats()[1];
    assert_eq!(detail_stats.misses, 1);
    assert_eq!(detail_stats.hits, 2);
}

#[tokio::test]
async fn test_other_season_is_a_new_request() {
    let server = MockServer::start().await;
    mount_detail(&server, "2024", 0, 1).await;
    mount_detail(&server, "2023", 0, 1).await;

    let queries = queries_for(&server);
    let uuid = PlayerUuid::new("p-0042");

    queries.player_details(&uuid, Season::new(2024)).await;
    queries.player_details(&uuid, Season::new(2023)).await;
    queries.player_details(&uuid, Season::new(2024)).await;
}

#[tokio::test]
async fn test_concurrent_callers_share_one_request() {
    let server = MockServer::start().await;
    mount_detail(&server, "2024", 150, 1).await;

    let queries = queries_for(&server);
    let uuid = PlayerUuid::new("p-0042");

    let season = Season::new(2024);
    let (a, b, c, d, e) = tokio::join!(
        queries.player_details(&uuid, season),
        queries.player_details(&uuid, season),
        queries.player_details(&uuid, season),
        queries.player_details(&uuid, season),
        queries.player_details(&uuid, season),
    );
    let states = [a, b, c, d, e];

    assert!(states.iter().all(|s| s.data().is_some()));
    assert_eq!(queries.details.stats().coalesced, 4);
}

#[tokio::test]
async fn test_cleared_cache_refetches() {
    let server = MockServer::start().await;
    mount_detail(&server, "2024", 0, 2).await;

    let queries = queries_for(&server);
    let uuid = PlayerUuid::new("p-0042");

    queries.player_details(&uuid, Season::new(2024)).await;
    queries.details.clear();
    queries.player_details(&uuid, Season::new(2024)).await;
}
