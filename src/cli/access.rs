//! Offline guard evaluation

use crate::{
    Error,
    access::{AccessGuard, Role, Session},
    error::format_error,
    types::DecisionResponse,
};
use anyhow::Result;

/// Arguments for `access`
#[derive(Debug, Default)]
pub struct AccessArgs {
    /// Guard name: `admin` or `user`
    pub guard: String,
    pub authenticated: bool,
    /// Resolved role, `regular` when omitted
    pub role: Option<String>,
    /// Role resolution still in flight
    pub loading: bool,
}

impl AccessArgs {
    pub fn to_session(&self) -> crate::Result<Session> {
        let role = match &self.role {
            Some(role) => role.parse::<Role>()?,
            None => Role::default(),
        };

        Ok(Session {
            is_authenticated: self.authenticated,
            role,
            loading_role_check: self.loading,
        })
    }
}

/// Evaluate the named guard against the session described by `args`
pub fn evaluate(args: &AccessArgs) -> crate::Result<DecisionResponse> {
    let guard = AccessGuard::from_name(&args.guard).ok_or_else(|| {
        Error::validation(
            "guard",
            &format!("Unknown guard '{}': expected 'admin' or 'user'", args.guard),
        )
    })?;

    let session = args.to_session()?;
    Ok(DecisionResponse::new(&guard, guard.check(&session)))
}

pub fn run_access(args: AccessArgs) -> Result<()> {
    let response = evaluate(&args).map_err(|e| anyhow::anyhow!(format_error(&e)))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
