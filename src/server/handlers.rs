//! HTTP request handlers
//!
//! Implementation of the JSON endpoints. Every failure is rendered as an
//! [`ErrorResponse`] whose status reflects the error category.

use crate::{
    Error,
    access::{AccessGuard, Session},
    contact::ContactForm,
    error::format_error_for_logging,
    server::app::AppState,
    types::{
        ContactResponse, DecisionResponse, ErrorResponse, GamesResponse, LiveStreamsParams,
        PingResponse,
    },
    utils::version,
    youtube::{StreamDetails, VideoSearchResult},
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

type ApiResult<T> = Result<Json<T>, ApiError>;

/// HTTP status for an error category
pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Validation { .. } => StatusCode::BAD_REQUEST,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Remote { .. } | Error::Network { .. } | Error::Decode { .. } => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn api_error(error: Error) -> ApiError {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(error = %format_error_for_logging(&error), "Request failed");
    } else {
        tracing::debug!("Request rejected: {}", error);
    }
    (status, Json(ErrorResponse::from_error(&error)))
}

/// Parse a JSON body, logging a preview of anything that does not decode
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        let preview_len = body.len().min(1000);
        tracing::error!(
            "Failed to deserialize JSON request: {}\nBody preview: {}",
            e,
            String::from_utf8_lossy(&body[..preview_len])
        );
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::with_context(
                format!("Invalid JSON: {}", e),
                "json_deserialization",
            )),
        )
    })
}

/// Ping endpoint for health checks
///
/// GET /ping
pub async fn ping(State(state): State<AppState>) -> Json<PingResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    tracing::debug!("Ping response: uptime={}s", uptime);
    Json(PingResponse::new(uptime, version::get_version()))
}

/// Search live gaming streams
///
/// GET /api/streams/live?game=&max_results=&page_token=
pub async fn live_streams(
    State(state): State<AppState>,
    params: Result<Query<LiveStreamsParams>, QueryRejection>,
) -> ApiResult<VideoSearchResult> {
    let Query(params) = params.map_err(|rejection| {
        api_error(Error::validation(
            "query".to_string(),
            rejection.body_text(),
        ))
    })?;

    let query = params.into_query();
    let result = state
        .discovery
        .search_live(&query)
        .await
        .map_err(api_error)?;

    tracing::info!(
        "Live search for {:?} returned {} streams",
        query.game_filter,
        result.len()
    );
    Ok(Json(result))
}

/// Details of a single stream
///
/// GET /api/streams/{id}
pub async fn stream_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StreamDetails> {
    match state.discovery.get_stream_details(&id).await {
        Ok(Some(details)) => Ok(Json(details)),
        Ok(None) => Err(api_error(Error::not_found("stream", id))),
        Err(e) => Err(api_error(e)),
    }
}

/// Game names from currently popular gaming videos
///
/// GET /api/games
pub async fn games(State(state): State<AppState>) -> ApiResult<GamesResponse> {
    let names = state
        .discovery
        .list_popular_game_names()
        .await
        .map_err(api_error)?;
    Ok(Json(GamesResponse::from(names)))
}

/// Evaluate a guard against the posted session
///
/// POST /api/access/{guard}
///
/// An empty body is treated as an anonymous session.
pub async fn access_decision(
    Path(guard): Path<String>,
    body: Bytes,
) -> ApiResult<DecisionResponse> {
    let guard = AccessGuard::from_name(&guard).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::with_context(
                format!("Unknown guard '{}'", guard),
                "not_found",
            )),
        )
    })?;

    let session: Session = if body.is_empty() {
        Session::anonymous()
    } else {
        parse_body(&body)?
    };

    let decision = guard.check(&session);
    tracing::debug!("Guard {} on {:?}: {:?}", guard.required_role(), session, decision);

    Ok(Json(DecisionResponse::new(&guard, decision)))
}

/// Relay a visitor's contact form
///
/// POST /api/contact
pub async fn contact(State(state): State<AppState>, body: Bytes) -> ApiResult<ContactResponse> {
    let form: ContactForm = parse_body(&body)?;

    let relay = state.contact.as_ref().ok_or_else(|| {
        api_error(Error::config(
            "contact.access_key",
            "Contact relay is not configured",
        ))
    })?;

    let outcome = relay.submit(&form).await.map_err(api_error)?;
    Ok(Json(ContactResponse::from(outcome)))
}
