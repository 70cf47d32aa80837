//! Server mode CLI logic
//!
//! Contains the core logic for running the HTTP API.

use super::{LogTarget, init_logging, load_settings};
use crate::{Settings, server::app, utils::version};
use anyhow::{Context, Result};

/// Arguments for server mode
#[derive(Debug, Default)]
pub struct ServerArgs {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Resolve settings for the server: file and environment, then CLI overrides.
///
/// An unreadable config file is reported and replaced by defaults so the
/// server can still come up from environment variables alone.
pub fn resolve_settings(args: &ServerArgs) -> Settings {
    let mut settings = load_settings(args.config.as_deref()).unwrap_or_else(|e| {
        // Logging is not initialized yet
        eprintln!(
            "Warning: Failed to load configuration: {}. Using defaults.",
            crate::error::format_error(&e)
        );
        Settings::default().merge_with_env().unwrap_or_default()
    });

    if let Some(host) = &args.host {
        settings.server.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if args.verbose {
        settings.logging.verbose = true;
    }

    settings
}

/// Run server mode with the given arguments
pub async fn run_server_mode(args: ServerArgs) -> Result<()> {
    let settings = resolve_settings(&args);
    init_logging(&settings.logging, args.verbose, LogTarget::Stdout);

    tracing::info!(
        "Starting esports-arena server v{}",
        version::get_detailed_version()
    );

    let app = app::create_app(settings.clone())
        .map_err(|e| anyhow::anyhow!(crate::error::format_error(&e)))
        .context("Failed to build the HTTP application")?;

    let addr = parse_and_bind_address(&settings.server.host, settings.server.port).await?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        "esports-arena v{} listening on {}",
        version::get_version(),
        listener.local_addr().unwrap_or(addr)
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Parse the host string into a bindable address.
///
/// `::` is tried first as IPv6 any; when the host has no IPv6 stack the
/// server falls back to `0.0.0.0`. Other hosts must be literal IPs.
pub async fn parse_and_bind_address(host: &str, port: u16) -> Result<std::net::SocketAddr> {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

    if host == "::" {
        let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), port);

        return match tokio::net::TcpListener::bind(addr).await {
            Ok(_) => {
                tracing::debug!("IPv6 any address {} is available", addr);
                Ok(addr)
            }
            Err(e) => {
                tracing::warn!(
                    "Could not listen on [::]:{} (Caused by {}), falling back to 0.0.0.0",
                    port,
                    e
                );
                Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port))
            }
        };
    }

    match host.parse::<IpAddr>() {
        Ok(ip) => {
            let addr = SocketAddr::new(ip, port);
            tracing::debug!("Parsed address: {}", addr);
            Ok(addr)
        }
        Err(_) => anyhow::bail!(
            "Invalid host address: {}. Use '::' for IPv6 or '0.0.0.0' for IPv4",
            host
        ),
    }
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
