//! HTTP server implementation
//!
//! Exposes the access guard, the discovery client and the contact relay over
//! a small JSON API built on Axum.

pub mod app;
pub mod handlers;

pub use app::{AppState, create_app, router};
