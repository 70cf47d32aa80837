//! Explicit discovery client configuration

use std::fmt;

/// Connection parameters for the YouTube Data API
#[derive(Clone, PartialEq, Eq)]
pub struct YouTubeConfig {
    api_key: String,
    base_url: String,
    region: String,
}

impl YouTubeConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            region: region.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Absolute URL of an endpoint below the API root
    pub fn endpoint_url(&self, endpoint: &str) -> crate::Result<url::Url> {
        let url = url::Url::parse(&format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint
        ))?;
        Ok(url)
    }
}

impl fmt::Debug for YouTubeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YouTubeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("region", &self.region)
            .finish()
    }
}
