//! Role-gated navigation
//!
//! This module decides whether a protected view may render for a session,
//! should show a pending state, or must redirect elsewhere.

pub mod guard;
pub mod session;

pub use guard::{AccessGuard, Decision, Route, decide};
pub use session::{Role, Session};
