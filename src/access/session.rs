//! Session snapshot handed to the access guard
//!
//! The session itself lives in an external identity store; the guard only
//! ever sees a read-only copy passed in by the caller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role flag attached to an authenticated session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular platform user
    #[default]
    #[serde(alias = "user")]
    Regular,
    /// Tournament administrator
    Admin,
}

impl Role {
    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" | "user" => Ok(Role::Regular),
            "admin" => Ok(Role::Admin),
            other => Err(crate::Error::validation(
                "role",
                &format!("Unknown role '{}': expected 'admin' or 'regular'", other),
            )),
        }
    }
}

/// Read-only view of the caller's session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether the identity store has an authenticated user
    #[serde(default)]
    pub is_authenticated: bool,
    /// Resolved role; meaningless while `loading_role_check` is set
    #[serde(default)]
    pub role: Role,
    /// Role resolution is still in flight
    #[serde(default)]
    pub loading_role_check: bool,
}

impl Session {
    /// A session with no authenticated user
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session whose role has been resolved
    pub fn authenticated(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role,
            loading_role_check: false,
        }
    }

    /// Mark role resolution as pending
    pub fn with_role_pending(mut self) -> Self {
        self.loading_role_check = true;
        self
    }
}
