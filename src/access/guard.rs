//! Role-gated access decisions
//!
//! Both guard flavours (admin-only and regular-only views) share one decision
//! table, parameterized by the role the protected view requires:
//!
//! | authenticated | role pending | outcome                                   |
//! |---------------|--------------|-------------------------------------------|
//! | no            | any          | redirect to `/login`                      |
//! | yes           | yes          | pending, no redirect                      |
//! | yes           | no           | render if roles match, else redirect home |
//!
//! A mismatched role is sent to its own landing page: admins to `/admin`,
//! regular users to `/home`.

use serde::{Deserialize, Serialize};

use super::session::{Role, Session};

/// Navigation target produced by a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Sign-in page
    Login,
    /// Regular user landing page
    Home,
    /// Admin landing page
    Admin,
}

impl Route {
    /// Path the router navigates to
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/home",
            Route::Admin => "/admin",
        }
    }

    /// Landing page for an authenticated role
    pub fn landing_for(role: Role) -> Self {
        match role {
            Role::Regular => Route::Home,
            Role::Admin => Route::Admin,
        }
    }
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Role resolution in flight; show a neutral indicator
    Pending,
    /// Render the protected view
    Render,
    /// Navigate away; `replace` drops the blocked page from history
    Redirect { to: Route, replace: bool },
}

impl Decision {
    fn redirect(to: Route) -> Self {
        Decision::Redirect { to, replace: true }
    }

    /// Redirect target, if any
    pub fn redirect_target(&self) -> Option<Route> {
        match self {
            Decision::Redirect { to, .. } => Some(*to),
            _ => None,
        }
    }
}

/// Decide whether a view requiring `required` may render for `session`.
pub fn decide(session: &Session, required: Role) -> Decision {
    if !session.is_authenticated {
        return Decision::redirect(Route::Login);
    }

    if session.loading_role_check {
        return Decision::Pending;
    }

    if session.role == required {
        Decision::Render
    } else {
        Decision::redirect(Route::landing_for(session.role))
    }
}

/// A guard protecting views that require one specific role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGuard {
    required: Role,
}

impl AccessGuard {
    pub fn new(required: Role) -> Self {
        Self { required }
    }

    /// Guard for admin-only views
    pub fn admin_only() -> Self {
        Self::new(Role::Admin)
    }

    /// Guard for views reserved to regular users
    pub fn regular_only() -> Self {
        Self::new(Role::Regular)
    }

    /// Look a guard up by its route-facing name (`admin`, `user`, `regular`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "admin" => Some(Self::admin_only()),
            "user" | "regular" => Some(Self::regular_only()),
            _ => None,
        }
    }

    pub fn required_role(&self) -> Role {
        self.required
    }

    pub fn check(&self, session: &Session) -> Decision {
        decide(session, self.required)
    }
}
