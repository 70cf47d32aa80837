//! Request type definitions

use serde::{Deserialize, Serialize};

use crate::youtube::VideoSearchQuery;

/// Query string of `GET /api/streams/live`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStreamsParams {
    /// Game name to narrow the search to
    pub game: Option<String>,

    /// Page size, 1..=50
    pub max_results: Option<u32>,

    /// Continuation token from a previous page
    pub page_token: Option<String>,
}

impl LiveStreamsParams {
    /// Convert into a discovery query; absent values take the query defaults
    pub fn into_query(self) -> VideoSearchQuery {
        let mut query = VideoSearchQuery::new();
        if let Some(game) = self.game.filter(|g| !g.trim().is_empty()) {
            query = query.with_game_filter(game);
        }
        if let Some(max_results) = self.max_results {
            query = query.with_max_results(max_results);
        }
        if let Some(token) = self.page_token.filter(|t| !t.is_empty()) {
            query = query.with_page_token(token);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::query::DEFAULT_MAX_RESULTS;

    #[test]
    fn test_empty_params_use_defaults() {
        let query = LiveStreamsParams::default().into_query();
        assert_eq!(query, VideoSearchQuery::default());
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_blank_game_is_ignored() {
        let params = LiveStreamsParams {
            game: Some("   ".to_string()),
            max_results: Some(25),
            page_token: Some("NEXT".to_string()),
        };

        let query = params.into_query();
        assert_eq!(query.game_filter, None);
        assert_eq!(query.max_results, 25);
        assert_eq!(query.page_token.as_deref(), Some("NEXT"));
    }
}
