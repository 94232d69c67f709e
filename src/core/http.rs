//! HTTP transport for the analytics backend

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    api::validate::{parse_validated, Validate},
    core::config::resolve_base_url,
    Result, ScoutError,
};

/// Headers sent with every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("football-scout/", env!("CARGO_PKG_VERSION"))),
    );
    h
}

/// The one outbound client, built once at startup.
///
/// No retries, backoff or timeout: a failed request surfaces straight away.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers())
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Build from `--base-url` / `SCOUT_API_BASE_URL` / the local default.
    pub fn from_env(flag: Option<&str>) -> Result<Self> {
        Self::new(resolve_base_url(flag)?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/players/search`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// GET `path`, then decode and validate the body as `T`.
    ///
    /// 404 maps to [`ScoutError::NotFound`], any other non-2xx status to
    /// [`ScoutError::Status`].
    pub async fn get_validated<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned + Validate,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        tracing::info!(%url, "GET");

        let res = self.client.get(&url).query(query).send().await?;
        let status = res.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ScoutError::NotFound {
                resource: path.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request failed");
            return Err(ScoutError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = res.bytes().await?;
        parse_validated(&body).inspect_err(|e| tracing::warn!(%url, error = %e, "invalid payload"))
    }
}
