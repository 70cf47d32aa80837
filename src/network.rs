//! HTTP client construction
//!
//! Builds the shared `reqwest::Client` used by the discovery client and the
//! contact relay from [`NetworkSettings`].

use crate::{Result, config::settings::NetworkSettings};
use reqwest::{Client, Proxy};
use std::time::Duration;

/// Build an HTTP client honoring proxy, user agent and optional timeouts.
///
/// With no timeouts configured requests wait indefinitely; callers wanting a
/// deadline set `network.request_timeout`.
pub fn build_http_client(settings: &NetworkSettings) -> Result<Client> {
    let mut client_builder = Client::builder().user_agent(settings.user_agent.as_str());

    if let Some(proxy_url) = settings.proxy_url() {
        let proxy = Proxy::all(&proxy_url).map_err(|e| {
            crate::Error::config("network.proxy", &format!("Invalid proxy URL '{}': {}", proxy_url, e))
        })?;
        tracing::debug!("Routing outbound requests through proxy {}", proxy_url);
        client_builder = client_builder.proxy(proxy);
    }

    if let Some(secs) = settings.connect_timeout {
        client_builder = client_builder.connect_timeout(Duration::from_secs(secs));
    }

    if let Some(secs) = settings.request_timeout {
        client_builder = client_builder.timeout(Duration::from_secs(secs));
    }

    client_builder.build().map_err(|e| {
        crate::Error::config(
            "network",
            &format!("Failed to create HTTP client: {}", e),
        )
    })
}
