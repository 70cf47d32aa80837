//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use esports_arena::{
    Result, Settings, VideoDiscovery, VideoSearchQuery,
    youtube::{GameNameSet, StreamDetails, VideoSearchResult, VideoSummary},
};
use serde_json::{Value, json};
use std::sync::Mutex;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key every mocked backend expects
pub const TEST_API_KEY: &str = "test-key";

/// Path prefix the mocked YouTube API is mounted under
pub const API_ROOT: &str = "/youtube/v3";

/// Test configuration factory
pub struct TestConfig;

impl TestConfig {
    /// Settings pointing the discovery client at a mock server
    pub fn with_youtube(server: &MockServer) -> Settings {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some(TEST_API_KEY.to_string());
        settings.youtube.base_url = format!("{}{}", server.uri(), API_ROOT);
        settings.logging.level = "debug".to_string();
        settings
    }

    /// Same as [`TestConfig::with_youtube`] with a contact relay on `relay`
    pub fn with_contact(server: &MockServer, relay: &MockServer) -> Settings {
        let mut settings = Self::with_youtube(server);
        settings.contact.endpoint = format!("{}/submit", relay.uri());
        settings.contact.access_key = Some("relay-key".to_string());
        settings
    }
}

/// Test data factory
pub struct MockData;

impl MockData {
    pub fn search_item(id: &str, title: &str, state: &str) -> Value {
        json!({
            "kind": "youtube#searchResult",
            "id": { "kind": "youtube#video", "videoId": id },
            "snippet": {
                "publishedAt": "2026-10-18T17:00:00Z",
                "channelId": "UCarena",
                "title": title,
                "description": "",
                "thumbnails": {
                    "default": { "url": format!("https://i.ytimg.com/vi/{}/default.jpg", id) },
                    "high": { "url": format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id) }
                },
                "channelTitle": "Arena TV",
                "liveBroadcastContent": state
            }
        })
    }

    pub fn search_page(items: Vec<Value>, next_page_token: Option<&str>) -> Value {
        let mut page = json!({ "kind": "youtube#searchListResponse", "items": items });
        if let Some(token) = next_page_token {
            page["nextPageToken"] = json!(token);
        }
        page
    }

    pub fn video(id: &str, title: &str) -> Value {
        json!({
            "kind": "youtube#video",
            "id": id,
            "snippet": {
                "publishedAt": "2026-10-18T17:00:00Z",
                "channelId": "UCarena",
                "title": title,
                "channelTitle": "Arena TV",
                "liveBroadcastContent": "live"
            },
            "liveStreamingDetails": {
                "actualStartTime": "2026-10-18T17:01:00Z",
                "concurrentViewers": "1200"
            },
            "statistics": { "viewCount": "5400", "likeCount": "310", "commentCount": "12" }
        })
    }

    pub fn video_list(items: Vec<Value>) -> Value {
        json!({ "kind": "youtube#videoListResponse", "items": items })
    }

    pub fn google_error(code: u16, message: &str) -> Value {
        json!({ "error": { "code": code, "message": message, "errors": [] } })
    }

    pub fn summary(id: &str, title: &str) -> VideoSummary {
        VideoSummary {
            id: id.to_string(),
            title: title.to_string(),
            channel_id: "UCarena".to_string(),
            channel_title: "Arena TV".to_string(),
            description: String::new(),
            published_at: None,
            thumbnail_url: None,
            live_broadcast_content: esports_arena::youtube::LiveBroadcastContent::Live,
        }
    }
}

/// Mock server factory
pub struct MockServerFactory;

impl MockServerFactory {
    pub async fn setup_search(server: &MockServer, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{}/search", API_ROOT)))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    pub async fn setup_videos(server: &MockServer, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{}/videos", API_ROOT)))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    pub async fn setup_error(server: &MockServer, status: u16, message: &str) {
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(MockData::google_error(status, message)),
            )
            .mount(server)
            .await;
    }
}

/// In-memory discovery backend that records the last search query
#[derive(Default)]
pub struct FakeDiscovery {
    pub live: Vec<VideoSummary>,
    pub details: Vec<StreamDetails>,
    pub games: Vec<String>,
    pub last_query: Mutex<Option<VideoSearchQuery>>,
}

impl FakeDiscovery {
    pub fn new() -> Self {
        Self {
            live: vec![
                MockData::summary("live1", "Valorant - VCT qualifiers"),
                MockData::summary("live2", "Chess | blitz arena"),
            ],
            details: vec![StreamDetails {
                summary: MockData::summary("live1", "Valorant - VCT qualifiers"),
                live: None,
                statistics: None,
            }],
            games: vec!["Valorant".to_string(), "Chess".to_string()],
            last_query: Mutex::new(None),
        }
    }

    pub fn last_query(&self) -> Option<VideoSearchQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl VideoDiscovery for FakeDiscovery {
    async fn search_live(&self, query: &VideoSearchQuery) -> Result<VideoSearchResult> {
        query.validate()?;
        *self.last_query.lock().unwrap() = Some(query.clone());

        Ok(VideoSearchResult {
            items: self.live.iter().take(query.max_results as usize).cloned().collect(),
            next_page_token: Some("NEXT".to_string()),
        })
    }

    async fn get_stream_details(&self, id: &str) -> Result<Option<StreamDetails>> {
        Ok(self.details.iter().find(|d| d.summary.id == id).cloned())
    }

    async fn list_popular_game_names(&self) -> Result<GameNameSet> {
        Ok(self.games.iter().collect())
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }
}
