//! Live-stream discovery against the YouTube Data API
//!
//! This module contains the discovery client, its configuration, the
//! request/response types and the game-name heuristic.

pub mod client;
pub mod config;
pub mod games;
pub mod query;
pub mod types;
mod wire;

pub use client::{VideoDiscovery, VideoDiscoveryClient};
pub use config::YouTubeConfig;
pub use games::{GameNameSet, collect_game_names, extract_game_name};
pub use query::VideoSearchQuery;
pub use types::{
    LiveBroadcastContent, LiveStreamingDetails, StreamDetails, VideoSearchResult, VideoStatistics,
    VideoSummary,
};
