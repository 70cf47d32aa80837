//! eSports Arena core
//!
//! Access guards and live-stream discovery for an eSports tournament
//! platform. The library decides which protected views a session may see and
//! queries the YouTube Data API v3 for live gaming streams, single stream
//! details and a list of currently popular games.
//!
//! # Features
//!
//! - **Access Guard**: Pure role-gating decisions (render, pending, redirect)
//! - **Video Discovery**: Live search with pagination, stream details, game names
//! - **Contact Relay**: Forwards visitor contact forms to a form-submission service
//! - **HTTP Server Mode**: JSON API over the above
//! - **One-shot CLI**: Every query available from the command line
//!
//! # Usage
//!
//! ```bash
//! export YOUTUBE_API_KEY=...
//! esports-arena server --port 8787
//! esports-arena live --game Valorant --max-results 5
//! esports-arena access --guard admin --authenticated --role regular
//! ```
//!
//! # Examples
//!
//! ```rust
//! use esports_arena::{AccessGuard, Decision, Role, Session};
//!
//! let guard = AccessGuard::admin_only();
//! let decision = guard.check(&Session::authenticated(Role::Admin));
//! assert_eq!(decision, Decision::Render);
//! ```
//!
//! ```rust,no_run
//! use esports_arena::{Settings, VideoDiscovery, VideoDiscoveryClient, VideoSearchQuery};
//!
//! # async fn example() -> esports_arena::Result<()> {
//! let settings = Settings::from_env()?;
//! let client = VideoDiscoveryClient::from_settings(&settings)?;
//! let page = client
//!     .search_live(&VideoSearchQuery::new().with_game_filter("Valorant"))
//!     .await?;
//! println!("{} live streams", page.len());
//! # Ok(())
//! # }
//! ```

pub mod access;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod network;
pub mod server;
pub mod types;
pub mod utils;
pub mod youtube;

pub use access::{AccessGuard, Decision, Role, Route, Session};
pub use config::{ConfigLoader, ConfigSource, Settings};
pub use contact::{ContactForm, ContactRelay};
pub use error::{Error, Result};
pub use youtube::{VideoDiscovery, VideoDiscoveryClient, VideoSearchQuery};
