//! Configuration management
//!
//! This module handles loading and managing configuration settings
//! for the HTTP API and the one-shot CLI commands.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, ConfigSource};
pub use settings::{
    ContactSettings, LoggingSettings, NetworkSettings, ServerSettings, Settings, YouTubeSettings,
};

/// Serializes tests that touch process environment variables
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
