//! One-shot discovery commands
//!
//! `live`, `stream` and `games` print their result as JSON on stdout; logs go
//! to stderr so the output stays machine-readable.

use super::{LogTarget, init_logging, load_settings};
use crate::{
    Error, Settings,
    error::format_error,
    types::{GamesResponse, LiveStreamsParams},
    youtube::{VideoDiscovery, VideoDiscoveryClient, VideoSearchQuery},
};
use anyhow::{Context, Result};

/// Options shared by every discovery command
#[derive(Debug, Default)]
pub struct CommonArgs {
    pub config: Option<String>,
    pub verbose: bool,
}

/// Arguments for `live`
#[derive(Debug, Default)]
pub struct LiveArgs {
    pub game: Option<String>,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
    pub common: CommonArgs,
}

impl LiveArgs {
    pub fn to_query(&self) -> VideoSearchQuery {
        LiveStreamsParams {
            game: self.game.clone(),
            max_results: self.max_results,
            page_token: self.page_token.clone(),
        }
        .into_query()
    }
}

fn setup(common: &CommonArgs) -> Result<VideoDiscoveryClient> {
    let settings: Settings = load_settings(common.config.as_deref())
        .map_err(|e| anyhow::anyhow!(format_error(&e)))
        .context("Failed to load configuration")?;
    init_logging(&settings.logging, common.verbose, LogTarget::Stderr);

    VideoDiscoveryClient::from_settings(&settings).map_err(|e| anyhow::anyhow!(format_error(&e)))
}

fn to_anyhow(error: Error) -> anyhow::Error {
    tracing::debug!("Command failed: {:?}", error);
    anyhow::anyhow!(format_error(&error))
}

/// Search live streams and render the page as pretty JSON
pub async fn live_json(
    discovery: &dyn VideoDiscovery,
    query: &VideoSearchQuery,
) -> crate::Result<String> {
    let result = discovery.search_live(query).await?;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Fetch one stream; a missing stream becomes [`Error::NotFound`]
pub async fn stream_json(discovery: &dyn VideoDiscovery, id: &str) -> crate::Result<String> {
    let details = discovery
        .get_stream_details(id)
        .await?
        .ok_or_else(|| Error::not_found("stream", id))?;
    Ok(serde_json::to_string_pretty(&details)?)
}

/// Popular game names as `{"games": [...]}`
pub async fn games_json(discovery: &dyn VideoDiscovery) -> crate::Result<String> {
    let names = discovery.list_popular_game_names().await?;
    Ok(serde_json::to_string_pretty(&GamesResponse::from(names))?)
}

pub async fn run_live(args: LiveArgs) -> Result<()> {
    let client = setup(&args.common)?;
    let output = live_json(&client, &args.to_query()).await.map_err(to_anyhow)?;
    println!("{}", output);
    Ok(())
}

pub async fn run_stream(id: String, common: CommonArgs) -> Result<()> {
    let client = setup(&common)?;
    let output = stream_json(&client, &id).await.map_err(to_anyhow)?;
    println!("{}", output);
    Ok(())
}

pub async fn run_games(common: CommonArgs) -> Result<()> {
    let client = setup(&common)?;
    let output = games_json(&client).await.map_err(to_anyhow)?;
    println!("{}", output);
    Ok(())
}
