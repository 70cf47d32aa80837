//! Request parameter assembly for the discovery endpoints

use serde::{Deserialize, Serialize};

/// YouTube's fixed "Gaming" category
pub const GAMING_CATEGORY_ID: &str = "20";

/// Upper bound the remote accepts for `maxResults`
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Page size used when the caller does not ask for one
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Search term used when no game filter is given
pub const DEFAULT_SEARCH_TERM: &str = "gaming live";

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

/// Parameters of a live stream search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSearchQuery {
    /// Game to bias the free-text search toward
    #[serde(default, alias = "game")]
    pub game_filter: Option<String>,
    /// Page size, 1 through 50
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Continuation token from a previous page
    #[serde(default)]
    pub page_token: Option<String>,
}

impl Default for VideoSearchQuery {
    fn default() -> Self {
        Self {
            game_filter: None,
            max_results: DEFAULT_MAX_RESULTS,
            page_token: None,
        }
    }
}

impl VideoSearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game_filter(mut self, game: impl Into<String>) -> Self {
        self.game_filter = Some(game.into());
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Reject page sizes outside 1..=50
    pub fn validate(&self) -> crate::Result<()> {
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(crate::Error::validation(
                "max_results",
                &format!(
                    "must be between 1 and {}, got {}",
                    MAX_RESULTS_LIMIT, self.max_results
                ),
            ));
        }
        Ok(())
    }

    /// Free-text `q` value: `"<game> gameplay live"` or the default term
    pub fn search_term(&self) -> String {
        match self
            .game_filter
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
        {
            Some(game) => format!("{} gameplay live", game),
            None => DEFAULT_SEARCH_TERM.to_string(),
        }
    }

    /// Query parameters for `GET /search`, excluding the API key
    pub fn to_params(&self, region: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "snippet".to_string()),
            ("type", "video".to_string()),
            ("eventType", "live".to_string()),
            ("videoCategoryId", GAMING_CATEGORY_ID.to_string()),
            ("order", "viewCount".to_string()),
            ("regionCode", region.to_string()),
            ("maxResults", self.max_results.to_string()),
            ("q", self.search_term()),
        ];

        if let Some(token) = self.page_token.as_deref().filter(|t| !t.is_empty()) {
            params.push(("pageToken", token.to_string()));
        }

        params
    }
}

/// Query parameters for a single-video lookup, excluding the API key
pub fn stream_details_params(id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("part", "snippet,liveStreamingDetails,statistics".to_string()),
        ("id", id.to_string()),
    ]
}

/// Query parameters for the most-popular gaming chart, excluding the API key
pub fn popular_gaming_params(region: &str) -> Vec<(&'static str, String)> {
    vec![
        ("part", "snippet".to_string()),
        ("chart", "mostPopular".to_string()),
        ("videoCategoryId", GAMING_CATEGORY_ID.to_string()),
        ("regionCode", region.to_string()),
        ("maxResults", MAX_RESULTS_LIMIT.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_game_filter_builds_gameplay_term() {
        let query = VideoSearchQuery::new()
            .with_game_filter("Valorant")
            .with_max_results(10);
        let params = query.to_params("US");

        assert_eq!(param(&params, "q"), Some("Valorant gameplay live"));
        assert_eq!(param(&params, "maxResults"), Some("10"));
        assert_eq!(param(&params, "videoCategoryId"), Some("20"));
        assert_eq!(param(&params, "order"), Some("viewCount"));
        assert_eq!(param(&params, "regionCode"), Some("US"));
        assert_eq!(param(&params, "eventType"), Some("live"));
        assert_eq!(param(&params, "pageToken"), None);
    }

    #[test]
    fn test_default_search_term() {
        assert_eq!(VideoSearchQuery::new().search_term(), "gaming live");
        assert_eq!(
            VideoSearchQuery::new().with_game_filter("   ").search_term(),
            "gaming live"
        );
    }

    #[test]
    fn test_page_token_is_forwarded() {
        let params = VideoSearchQuery::new()
            .with_page_token("CBQQAA")
            .to_params("GB");

        assert_eq!(param(&params, "pageToken"), Some("CBQQAA"));
        assert_eq!(param(&params, "regionCode"), Some("GB"));
    }

    #[test]
    fn test_max_results_bounds() {
        assert!(VideoSearchQuery::new().with_max_results(1).validate().is_ok());
        assert!(VideoSearchQuery::new().with_max_results(50).validate().is_ok());
        assert!(VideoSearchQuery::new().with_max_results(0).validate().is_err());
        assert!(VideoSearchQuery::new().with_max_results(51).validate().is_err());
    }

    #[test]
    fn test_query_deserializes_with_game_alias() {
        let query: VideoSearchQuery =
            serde_json::from_str(r#"{"game": "Dota 2", "page_token": "abc"}"#).unwrap();

        assert_eq!(query.game_filter.as_deref(), Some("Dota 2"));
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(query.page_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_popular_gaming_params() {
        let params = popular_gaming_params("US");
        assert_eq!(param(&params, "chart"), Some("mostPopular"));
        assert_eq!(param(&params, "videoCategoryId"), Some("20"));
        assert_eq!(param(&params, "maxResults"), Some("50"));
    }
}
