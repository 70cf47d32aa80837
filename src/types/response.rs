//! Response type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::access::{AccessGuard, Decision};
use crate::contact::ContactOutcome;
use crate::youtube::GameNameSet;

/// Ping response for health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Server uptime in seconds
    pub server_uptime: u64,

    /// Server version
    pub version: String,
}

impl PingResponse {
    pub fn new(server_uptime: u64, version: impl Into<String>) -> Self {
        Self {
            server_uptime,
            version: version.into(),
        }
    }
}

/// Error response for API errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Error category, e.g. `validation` or `remote`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Error timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            context: None,
            timestamp: Some(Utc::now()),
            version: Some(crate::utils::version::get_version().to_string()),
        }
    }

    /// Create error response with context
    pub fn with_context(error: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..Self::new(error)
        }
    }

    /// Build a response from a crate error, tagged with its category
    pub fn from_error(error: &crate::Error) -> Self {
        Self::with_context(crate::error::format_error(error), error.category())
    }
}

/// Decision outcome as seen by a client router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionOutcome {
    Pending,
    Render,
    Redirect,
}

/// Result of a guard check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    /// Role the guarded view requires
    pub guard: String,

    pub outcome: DecisionOutcome,

    /// Path to navigate to, for redirects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,

    /// Whether the navigation replaces the current history entry
    pub replace: bool,
}

impl DecisionResponse {
    pub fn new(guard: &AccessGuard, decision: Decision) -> Self {
        let (outcome, redirect_to, replace) = match decision {
            Decision::Pending => (DecisionOutcome::Pending, None, false),
            Decision::Render => (DecisionOutcome::Render, None, false),
            Decision::Redirect { to, replace } => {
                (DecisionOutcome::Redirect, Some(to.path().to_string()), replace)
            }
        };

        Self {
            guard: guard.required_role().to_string(),
            outcome,
            redirect_to,
            replace,
        }
    }
}

/// Game names derived from popular gaming videos
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesResponse {
    pub games: GameNameSet,
}

impl From<GameNameSet> for GamesResponse {
    fn from(games: GameNameSet) -> Self {
        Self { games }
    }
}

/// Contact submission outcome returned to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl From<ContactOutcome> for ContactResponse {
    fn from(outcome: ContactOutcome) -> Self {
        Self {
            message: outcome.status_message().to_string(),
            success: outcome.success,
        }
    }
}
