//! Endpoint calls against the analytics backend.
//!
//! Each function issues one GET through [`ApiClient`] and returns the
//! validated entity. No caching happens here; see [`crate::api::queries`].

use crate::{
    api::types::{PagedPlayers, PlayerDetail, SearchResult},
    cli::types::{PlayerUuid, Season},
    core::http::ApiClient,
    Result,
};


/// Number of rows the autocomplete asks for.
pub const SEARCH_LIMIT: u32 = 10;

/// Largest `n` the similarity endpoint accepts.
pub const MAX_SIMILAR: u8 = 20;

const NO_QUERY: &[(&str, &str)] = &[];

/// `GET /players/search?query=&limit=`
pub async fn search_players(
    client: &ApiClient,
    query: &str,
    limit: u32,
) -> Result<Vec<SearchResult>> {
    client
        .get_validated(
            "/players/search",
            &[("query", query.to_string()), ("limit", limit.to_string())],
        )
        .await
}

/// `GET /player/{uuid}/details?season=`
pub async fn get_player_details(
    client: &ApiClient,
    uuid: &PlayerUuid,
    season: Season,
) -> Result<PlayerDetail> {
    client
        .get_validated(
            &format!("/player/{}/details", encode_segment(uuid.as_str())),
            &[("season", season.to_string())],
        )
        .await
}

/// `GET /player/{uuid}/similar?n=`
pub async fn get_similar_players(
    client: &ApiClient,
    uuid: &PlayerUuid,
    n: u8,
) -> Result<Vec<SearchResult>> {
    client
        .get_validated(
            &format!("/player/{}/similar", encode_segment(uuid.as_str())),
            &[("n", n.to_string())],
        )
        .await
}

/// `GET /players`
pub async fn list_players(client: &ApiClient) -> Result<PagedPlayers> {
    client.get_validated("/players", NO_QUERY).await
}

/// `GET /players/{id}`, the older detail route.
///
/// Kept for backends that predate `/player/{uuid}/details`; it takes no
/// season and answers with the same `PlayerDetail` shape.
pub async fn get_player_by_id(client: &ApiClient, id: &PlayerUuid) -> Result<PlayerDetail> {
    client
        .get_validated(&format!("/players/{}", encode_segment(id.as_str())), NO_QUERY)
        .await
}

/// Percent-encode one path segment.
fn encode_segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
