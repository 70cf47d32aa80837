//! Axum application setup
//!
//! Creates and configures the Axum application with routes and middleware.

use crate::{
    config::Settings,
    contact::ContactRelay,
    youtube::{VideoDiscovery, VideoDiscoveryClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Live-stream discovery backend
    pub discovery: Arc<dyn VideoDiscovery>,
    /// Contact form relay; `None` when no access key is configured
    pub contact: Option<Arc<ContactRelay>>,
    /// Application settings
    pub settings: Arc<Settings>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(discovery: Arc<dyn VideoDiscovery>, settings: Settings) -> Self {
        Self {
            discovery,
            contact: None,
            settings: Arc::new(settings),
            start_time: std::time::Instant::now(),
        }
    }

    pub fn with_contact(mut self, relay: ContactRelay) -> Self {
        self.contact = Some(Arc::new(relay));
        self
    }
}

/// Build the application from settings.
///
/// Fails when the YouTube API key is missing. The contact relay is optional;
/// without an access key `/api/contact` answers with a configuration error.
pub fn create_app(settings: Settings) -> crate::Result<Router> {
    let discovery = Arc::new(VideoDiscoveryClient::from_settings(&settings)?);

    let contact = match settings.contact_config() {
        Ok(_) => Some(ContactRelay::from_settings(&settings)?),
        Err(e) => {
            tracing::warn!("{}; /api/contact is disabled", e);
            None
        }
    };

    let mut state = AppState::new(discovery, settings);
    if let Some(relay) = contact {
        state = state.with_contact(relay);
    }

    Ok(router(state))
}

/// Wire routes and middleware around an existing state
pub fn router(state: AppState) -> Router {
    let cors = if state.settings.server.enable_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/ping", get(super::handlers::ping))
        .route("/api/streams/live", get(super::handlers::live_streams))
        .route("/api/streams/{id}", get(super::handlers::stream_details))
        .route("/api/games", get(super::handlers::games))
        .route("/api/access/{guard}", post(super::handlers::access_decision))
        .route("/api/contact", post(super::handlers::contact))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
