//! Build and version information

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name used in banners and the outgoing user agent
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub fn get_version() -> &'static str {
    VERSION
}

/// Version with the commit and build date baked in at compile time, when known
pub fn get_detailed_version() -> String {
    let git_hash = option_env!("GIT_HASH").unwrap_or("unknown");
    let build_date = option_env!("BUILD_DATE").unwrap_or("unknown");

    format!("{} ({}@{})", VERSION, git_hash, build_date)
}

/// Default `User-Agent` header for outgoing requests
pub fn user_agent() -> String {
    format!("{}/{}", NAME, VERSION)
}
