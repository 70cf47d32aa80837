//! Locating and layering configuration files
//!
//! Settings are built from four layers, lowest first: defaults, a TOML file,
//! environment variables and command-line flags. [`ConfigLoader`] resolves
//! which file supplies the second layer and applies the first three. Flags
//! are applied by the `cli` entry points.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{Error, Result, config::Settings};

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "ARENA_CONFIG";

const APP_DIR: &str = "esports-arena";
const CONFIG_FILE: &str = "config.toml";

/// Where the file layer comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; must exist
    Explicit(PathBuf),
    /// Named by `ARENA_CONFIG`
    EnvVar(PathBuf),
    /// `esports-arena/config.toml` in the platform config directory
    UserDir(PathBuf),
    /// No file, only defaults and environment
    Defaults,
}

impl ConfigSource {
    /// Resolve the file layer for an optional `--config` value.
    ///
    /// Without a flag, `ARENA_CONFIG` is tried and then the user config
    /// directory; either is skipped when its file does not exist.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            if path.is_file() {
                return ConfigSource::EnvVar(path);
            }
            warn!(
                "{} points to a missing file: {}",
                CONFIG_ENV_VAR,
                path.display()
            );
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .filter(|path| path.is_file())
            .map(ConfigSource::UserDir)
            .unwrap_or(ConfigSource::Defaults)
    }

    /// File backing this source, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::EnvVar(path)
            | ConfigSource::UserDir(path) => Some(path),
            ConfigSource::Defaults => None,
        }
    }
}

/// Builds validated [`Settings`] from a [`ConfigSource`]
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: ConfigSource,
}

impl ConfigLoader {
    pub fn new(source: ConfigSource) -> Self {
        Self { source }
    }

    /// Loader for an optional `--config` value
    pub fn discover(explicit: Option<&Path>) -> Self {
        Self::new(ConfigSource::resolve(explicit))
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// Read the file layer, apply environment overrides and validate
    pub fn load(&self) -> Result<Settings> {
        let settings = match &self.source {
            ConfigSource::Explicit(path) if !path.is_file() => {
                return Err(Error::config(
                    "config".to_string(),
                    format!("Configuration file not found: {}", path.display()),
                ));
            }
            ConfigSource::Explicit(path)
            | ConfigSource::EnvVar(path)
            | ConfigSource::UserDir(path) => {
                info!("Loading configuration from {}", path.display());
                Settings::from_file(path)?
            }
            ConfigSource::Defaults => {
                debug!("No configuration file found, starting from defaults");
                Settings::default()
            }
        };

        let settings = settings.merge_with_env()?;
        settings.validate()?;
        debug!("Effective configuration: {:?}", settings);

        Ok(settings)
    }
}
