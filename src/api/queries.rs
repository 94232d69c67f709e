//! Read operations bound to the shared query cache.
//!
//! One method per screen-level read. Each binds a key, a fetch function and a
//! [`QueryPolicy`], and reports a [`QueryState`]:
//!
//! | Operation | Enabled when | Fresh for | Retained |
//! |---|---|---|---|
//! | [`PlayerQueries::search_players`] | query longer than 2 chars | never | not kept |
//! | [`PlayerQueries::player_details`] | uuid non-empty | 10 min | 5 min |
//! | [`PlayerQueries::similar_players`] | uuid non-empty | never | 5 min |
//! | [`PlayerQueries::player_list`] | always | 5 min | 5 min |
//!
//! Requests are deduplicated by key, so two views asking for the same player
//! and season share one request.

use std::time::Duration;

use crate::{
    api::{
        http::{
            get_player_details, get_similar_players, list_players, search_players, SEARCH_LIMIT,
        },
        types::{PagedPlayers, PlayerDetail, SearchResult},
    },
    cli::types::{PlayerUuid, Season},
    core::{
        cache::{CacheKey, CacheStats, QueryCache, QueryPolicy, QueryState},
        http::ApiClient,
    },
};


/// Search only fires once the query is longer than this.
pub const MIN_SEARCH_CHARS: usize = 2;

/// Similar players asked for when the caller does not say.
pub const DEFAULT_SIMILAR: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    pub query: String,
    pub limit: u32,
}

impl CacheKey for SearchKey {
    fn operation(&self) -> &'static str {
        "playerSearch"
    }

    fn arguments(&self) -> Vec<String> {
        vec![self.query.clone(), self.limit.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DetailKey {
    pub uuid: PlayerUuid,
    pub season: Season,
}

impl CacheKey for DetailKey {
    fn operation(&self) -> &'static str {
        "playerDetail"
    }

    fn arguments(&self) -> Vec<String> {
        vec![self.uuid.to_string(), self.season.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimilarKey {
    pub uuid: PlayerUuid,
    pub n: u8,
}

impl CacheKey for SimilarKey {
    fn operation(&self) -> &'static str {
        "similarPlayers"
    }

    fn arguments(&self) -> Vec<String> {
        vec![self.uuid.to_string(), self.n.to_string()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayersKey;

impl CacheKey for PlayersKey {
    fn operation(&self) -> &'static str {
        "players"
    }

    fn arguments(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Cache policies per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPolicies {
    pub search: QueryPolicy,
    pub details: QueryPolicy,
    pub similar: QueryPolicy,
    pub players: QueryPolicy,
}

impl Default for QueryPolicies {
    fn default() -> Self {
        Self {
            search: QueryPolicy::uncached(),
            details: QueryPolicy::fresh_for(Duration::from_secs(10 * 60)),
            similar: QueryPolicy::default(),
            players: QueryPolicy::fresh_for(Duration::from_secs(5 * 60)),
        }
    }
}

/// The shared client-side cache plus the transport it fetches through.
pub struct PlayerQueries {
    client: ApiClient,
    pub search: QueryCache<Vec<SearchResult>>,
    pub details: QueryCache<PlayerDetail>,
    pub similar: QueryCache<Vec<SearchResult>>,
    pub players: QueryCache<PagedPlayers>,
}

impl PlayerQueries {
    pub fn new(client: ApiClient) -> Self {
        Self::with_policies(client, QueryPolicies::default())
    }

    pub fn with_policies(client: ApiClient, policies: QueryPolicies) -> Self {
        Self {
            client,
            search: QueryCache::new("playerSearch", policies.search, 50),
            details: QueryCache::new("playerDetail", policies.details, 100),
            similar: QueryCache::new("similarPlayers", policies.similar, 100),
            players: QueryCache::new("players", policies.players, 10),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Autocomplete search. Queries of two characters or fewer stay `Idle`
    /// and never reach the network.
    pub async fn search_players(&self, query: &str) -> QueryState<Vec<SearchResult>> {
        if query.chars().count() <= MIN_SEARCH_CHARS {
            return QueryState::Idle;
        }

        let key = SearchKey {
            query: query.to_string(),
            limit: SEARCH_LIMIT,
        };
        self.search
            .fetch(&key, || search_players(&self.client, query, SEARCH_LIMIT))
            .await
            .into()
    }

    /// Player profile for one season; the season is part of the key.
    pub async fn player_details(
        &self,
        uuid: &PlayerUuid,
        season: Season,
    ) -> QueryState<PlayerDetail> {
        if uuid.is_empty() {
            return QueryState::Idle;
        }

        let key = DetailKey {
            uuid: uuid.clone(),
            season,
        };
        self.details
            .fetch(&key, || get_player_details(&self.client, uuid, season))
            .await
            .into()
    }

    /// Up to `n` players with a similar profile.
    pub async fn similar_players(&self, uuid: &PlayerUuid, n: u8) -> QueryState<Vec<SearchResult>> {
        if uuid.is_empty() {
            return QueryState::Idle;
        }

        let key = SimilarKey {
            uuid: uuid.clone(),
            n,
        };
        self.similar
            .fetch(&key, || get_similar_players(&self.client, uuid, n))
            .await
            .map(|mut players| {
                players.truncate(usize::from(n));
                players
            })
            .into()
    }

    /// First page of the player list.
    pub async fn player_list(&self) -> QueryState<PagedPlayers> {
        self.players
            .fetch(&PlayersKey, || list_players(&self.client))
            .await
            .into()
    }

    /// Counters per operation, for `--verbose` output.
    pub fn stats(&self) -> [(&'static str, CacheStats); 4] {
        [
            ("playerSearch", self.search.stats()),
            ("playerDetail", self.details.stats()),
            ("similarPlayers", self.similar.stats()),
            ("players", self.players.stats()),
        ]
    }
}
