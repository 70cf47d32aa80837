//! Discovery result types
//!
//! Request-scoped values returned by the discovery client. Nothing here is
//! cached; each call builds fresh values from the remote payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wire;

/// Remote-reported broadcast state of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LiveBroadcastContent {
    /// Broadcasting right now
    #[serde(rename = "live")]
    Live,
    /// Scheduled but not started
    #[serde(rename = "upcoming")]
    Upcoming,
    /// Not a live broadcast; unknown remote values land here too
    #[default]
    #[serde(rename = "none", other)]
    NotLive,
}

/// Summary of one video as shown in stream listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub thumbnail_url: Option<String>,
    pub live_broadcast_content: LiveBroadcastContent,
}

impl VideoSummary {
    pub fn is_live(&self) -> bool {
        self.live_broadcast_content == LiveBroadcastContent::Live
    }

    fn from_snippet(id: String, snippet: wire::Snippet) -> Self {
        Self {
            thumbnail_url: snippet.thumbnails.best_url(),
            id,
            title: snippet.title,
            channel_id: snippet.channel_id,
            channel_title: snippet.channel_title,
            description: snippet.description,
            published_at: snippet.published_at,
            live_broadcast_content: snippet.live_broadcast_content,
        }
    }

    /// Convert a search hit; hits that are not videos yield `None`
    pub(crate) fn from_search_result(result: wire::SearchResult) -> Option<Self> {
        let id = result.id.video_id?;
        Some(Self::from_snippet(id, result.snippet))
    }
}

/// One page of live search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoSearchResult {
    /// Videos in remote order
    pub items: Vec<VideoSummary>,
    /// Token for the following page, if the remote reported one
    pub next_page_token: Option<String>,
}

impl VideoSearchResult {
    /// Drop every item the remote does not report as currently live.
    ///
    /// The search endpoint's `eventType=live` filter lets upcoming and
    /// recently ended broadcasts through, so this runs on every search.
    pub fn retain_live(mut self) -> Self {
        self.items.retain(VideoSummary::is_live);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn from_wire(response: wire::SearchListResponse) -> Self {
        Self {
            items: response
                .items
                .into_iter()
                .filter_map(VideoSummary::from_search_result)
                .collect(),
            next_page_token: response.next_page_token,
        }
    }
}

/// Live-specific metadata of a broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStreamingDetails {
    pub actual_start_time: Option<DateTime<Utc>>,
    pub scheduled_start_time: Option<DateTime<Utc>>,
    pub concurrent_viewers: Option<u64>,
}

/// Engagement counters of a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoStatistics {
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub comment_count: Option<u64>,
}

/// Full details of a single stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamDetails {
    pub summary: VideoSummary,
    pub live: Option<LiveStreamingDetails>,
    pub statistics: Option<VideoStatistics>,
}

impl StreamDetails {
    pub(crate) fn from_wire(video: wire::VideoResource) -> Self {
        Self {
            summary: VideoSummary::from_snippet(video.id, video.snippet),
            live: video.live_streaming_details.map(|d| LiveStreamingDetails {
                actual_start_time: d.actual_start_time,
                scheduled_start_time: d.scheduled_start_time,
                concurrent_viewers: d.concurrent_viewers,
            }),
            statistics: video.statistics.map(|s| VideoStatistics {
                view_count: s.view_count,
                like_count: s.like_count,
                comment_count: s.comment_count,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn search_item(id: &str, title: &str, state: &str) -> serde_json::Value {
        json!({
            "id": { "kind": "youtube#video", "videoId": id },
            "snippet": {
                "title": title,
                "channelTitle": "Arena",
                "liveBroadcastContent": state
            }
        })
    }

    #[test]
    fn test_unknown_broadcast_state_is_not_live() {
        let state: LiveBroadcastContent = serde_json::from_value(json!("completed")).unwrap();
        assert_eq!(state, LiveBroadcastContent::NotLive);

        let state: LiveBroadcastContent = serde_json::from_value(json!("upcoming")).unwrap();
        assert_eq!(state, LiveBroadcastContent::Upcoming);
    }

    #[test]
    fn test_retain_live_keeps_only_live_items() {
        let response: wire::SearchListResponse = serde_json::from_value(json!({
            "nextPageToken": "CAoQAA",
            "items": [
                search_item("a", "Live one", "live"),
                search_item("b", "Soon", "upcoming"),
                search_item("c", "VOD", "none"),
                search_item("d", "Live two", "live")
            ]
        }))
        .unwrap();

        let result = VideoSearchResult::from_wire(response).retain_live();

        let ids: Vec<&str> = result.items.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert_eq!(result.next_page_token.as_deref(), Some("CAoQAA"));
    }

    #[test]
    fn test_missing_broadcast_state_is_filtered() {
        let response: wire::SearchListResponse = serde_json::from_value(json!({
            "items": [
                { "id": { "videoId": "x" }, "snippet": { "title": "No state" } }
            ]
        }))
        .unwrap();

        assert!(VideoSearchResult::from_wire(response).retain_live().is_empty());
    }

    #[test]
    fn test_stream_details_from_video_resource() {
        let video: wire::VideoResource = serde_json::from_value(json!({
            "id": "live123",
            "snippet": {
                "publishedAt": "2026-10-01T18:00:00Z",
                "channelId": "UCarena",
                "title": "Finals day",
                "channelTitle": "Arena",
                "liveBroadcastContent": "live"
            },
            "liveStreamingDetails": {
                "actualStartTime": "2026-10-01T18:02:11Z",
                "concurrentViewers": "4821"
            },
            "statistics": { "viewCount": "99000", "likeCount": "3100" }
        }))
        .unwrap();

        let details = StreamDetails::from_wire(video);

        assert_eq!(details.summary.id, "live123");
        assert!(details.summary.is_live());
        assert_eq!(details.live.as_ref().unwrap().concurrent_viewers, Some(4821));
        assert_eq!(
            details.statistics,
            Some(VideoStatistics {
                view_count: Some(99000),
                like_count: Some(3100),
                comment_count: None,
            })
        );
    }
}
