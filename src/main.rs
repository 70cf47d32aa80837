//! Unified CLI for the eSports Arena core
//!
//! One binary with a subcommand per operation: the HTTP API server, the three
//! discovery queries and an offline access-guard check.
//!
//! # Usage
//!
//! ## Server Mode
//! ```bash
//! esports-arena server --port 8787 --host 0.0.0.0
//! ```
//!
//! ## Discovery
//! ```bash
//! esports-arena live --game "Rocket League" --max-results 5
//! esports-arena stream dQw4w9WgXcQ
//! esports-arena games
//! ```
//!
//! ## Access Guard
//! ```bash
//! esports-arena access --guard admin --authenticated --role regular
//! ```

use clap::{Args, Parser, Subcommand};

use esports_arena::cli::{
    access::{AccessArgs, run_access},
    discover::{CommonArgs, LiveArgs, run_games, run_live, run_stream},
    server::{ServerArgs, run_server_mode},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "esports-arena")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Configuration and logging options shared by the network commands
#[derive(Args, Debug, Default)]
struct GlobalOpts {
    /// Configuration file path
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<GlobalOpts> for CommonArgs {
    fn from(opts: GlobalOpts) -> Self {
        CommonArgs {
            config: opts.config,
            verbose: opts.verbose,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server mode
    Server {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        #[command(flatten)]
        opts: GlobalOpts,
    },

    /// Search currently-live gaming streams
    Live {
        /// Game to search for
        #[arg(short, long)]
        game: Option<String>,

        /// Page size (1-50)
        #[arg(short, long, value_name = "N")]
        max_results: Option<u32>,

        /// Continuation token from a previous page
        #[arg(long, allow_hyphen_values = true)]
        page_token: Option<String>,

        #[command(flatten)]
        opts: GlobalOpts,
    },

    /// Show details of one stream
    Stream {
        /// Video ID
        #[arg(value_name = "ID", allow_hyphen_values = true)]
        id: String,

        #[command(flatten)]
        opts: GlobalOpts,
    },

    /// List game names from popular gaming videos
    Games {
        #[command(flatten)]
        opts: GlobalOpts,
    },

    /// Evaluate an access guard for a session
    Access {
        /// Guard protecting the view
        #[arg(long, value_parser = ["admin", "user"])]
        guard: String,

        /// The session has an authenticated user
        #[arg(long)]
        authenticated: bool,

        /// Resolved role of the user
        #[arg(long, value_parser = ["admin", "regular", "user"])]
        role: Option<String>,

        /// Role resolution is still in flight
        #[arg(long)]
        loading: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Server { port, host, opts } => {
            let args = ServerArgs {
                port,
                host,
                config: opts.config,
                verbose: opts.verbose,
            };
            run_server_mode(args).await
        }
        Commands::Live {
            game,
            max_results,
            page_token,
            opts,
        } => {
            let args = LiveArgs {
                game,
                max_results,
                page_token,
                common: opts.into(),
            };
            run_live(args).await
        }
        Commands::Stream { id, opts } => run_stream(id, opts.into()).await,
        Commands::Games { opts } => run_games(opts.into()).await,
        Commands::Access {
            guard,
            authenticated,
            role,
            loading,
        } => run_access(AccessArgs {
            guard,
            authenticated,
            role,
            loading,
        }),
    }
}
