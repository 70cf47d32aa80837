//! YouTube Data API discovery client
//!
//! Wraps the three read-only queries the platform needs behind the
//! [`VideoDiscovery`] trait. Every call issues fresh network I/O; there is no
//! cache and no internal retry. Failures surface as [`Error::Network`],
//! [`Error::Remote`] or [`Error::Decode`] tagged with the endpoint name.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::config::YouTubeConfig;
use super::games::{GameNameSet, collect_game_names};
use super::query::{VideoSearchQuery, popular_gaming_params, stream_details_params};
use super::types::{StreamDetails, VideoSearchResult};
use super::wire::{SearchListResponse, VideoListResponse};
use crate::{Error, Result, Settings};

const SEARCH_ENDPOINT: &str = "search";
const VIDEOS_ENDPOINT: &str = "videos";

/// Trait for discovery operations to enable testing with fakes
#[async_trait::async_trait]
pub trait VideoDiscovery: Send + Sync {
    /// Search currently-live gaming streams
    async fn search_live(&self, query: &VideoSearchQuery) -> Result<VideoSearchResult>;

    /// Fetch one video by id; `None` when the remote has no such video
    async fn get_stream_details(&self, id: &str) -> Result<Option<StreamDetails>>;

    /// Derive game names from the most popular gaming videos
    async fn list_popular_game_names(&self) -> Result<GameNameSet>;
}

/// Discovery client backed by the YouTube Data API v3
#[derive(Debug, Clone)]
pub struct VideoDiscoveryClient {
    /// HTTP client
    client: Client,
    /// API key, root URL and region
    config: YouTubeConfig,
}

impl VideoDiscoveryClient {
    pub fn new(client: Client, config: YouTubeConfig) -> Self {
        Self { client, config }
    }

    /// Build a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = crate::network::build_http_client(&settings.network)?;
        Ok(Self::new(client, settings.youtube_config()?))
    }

    pub fn config(&self) -> &YouTubeConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let mut url = self.config.endpoint_url(endpoint)?;
        tracing::debug!("GET {} {:?}", url, params);

        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .append_pair("key", self.config.api_key());

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to send request to {}: {}", endpoint, e);
            Error::network(endpoint, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = remote_error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| "unknown error".to_string());
            tracing::error!("{} returned error status {}: {}", endpoint, status, message);
            return Err(Error::remote(endpoint, status.as_u16(), message));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(endpoint, e))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse {} response: {}", endpoint, e);
            Error::decode(endpoint, e.to_string())
        })
    }
}

/// Pull `error.message` out of a Google API error body
fn remote_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[async_trait::async_trait]
impl VideoDiscovery for VideoDiscoveryClient {
    async fn search_live(&self, query: &VideoSearchQuery) -> Result<VideoSearchResult> {
        query.validate()?;

        let params = query.to_params(self.config.region());
        let response: SearchListResponse = self.get_json(SEARCH_ENDPOINT, &params).await?;

        let result = VideoSearchResult::from_wire(response);
        let before = result.len();
        let result = result.retain_live();

        if result.len() < before {
            tracing::debug!(
                "Dropped {} search hits not reported as live",
                before - result.len()
            );
        }

        Ok(result)
    }

    async fn get_stream_details(&self, id: &str) -> Result<Option<StreamDetails>> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::validation("id", "video id must not be empty"));
        }

        let response: VideoListResponse = self
            .get_json(VIDEOS_ENDPOINT, &stream_details_params(id))
            .await?;

        Ok(response.items.into_iter().next().map(StreamDetails::from_wire))
    }

    async fn list_popular_game_names(&self) -> Result<GameNameSet> {
        let response: VideoListResponse = self
            .get_json(VIDEOS_ENDPOINT, &popular_gaming_params(self.config.region()))
            .await?;

        let names = collect_game_names(response.items.iter().map(|v| v.snippet.title.as_str()));
        tracing::debug!(
            "Extracted {} game names from {} popular videos",
            names.len(),
            response.items.len()
        );

        Ok(names)
    }
}
