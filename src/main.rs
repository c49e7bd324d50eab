#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pubgate
//!
//! Stream publish authorization callback for ingest servers.
//!
//! RTMP-style media servers fire an HTTP callback before admitting a
//! publisher. pubgate answers that callback: it accepts a form-encoded body
//! on `POST /auth`, compares the `key` field against the configured stream
//! key, and replies with a bare status code.
//!
//! ## API surface
//!
//! | Method | Path    | Response                                       |
//! |--------|---------|------------------------------------------------|
//! | POST   | `/auth` | `200` key matches, `403` otherwise, empty body |
//! | any    | other   | `404`, empty body                              |
//!
//! Bodies over `server.max_body_bytes` get `413`; requests that outlive
//! `server.request_timeout_ms` get `408`. Both bounds are configurable, see
//! `config.rs`.
//!
//! ## Architecture
//!
//! ```text
//! main.rs     - entry point, CLI, tracing init
//! server.rs   - router assembly, serve loop, graceful shutdown
//! config.rs   - TOML + env-var configuration
//! auth.rs     - stream-key comparison
//! body.rs     - bounded request-body accumulation
//! form.rs     - URL-encoded form decoding
//! routes/
//!   authorize.rs - POST /auth
//! ```

use clap::Parser;
use tracing::{info, warn};

use pubgate::{server, AppState, Config};

/// Stream publish authorization callback for ingest servers.
#[derive(Parser)]
#[command(name = "pubgate", version)]
struct Cli {
    /// Path to TOML config file.
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    // Initialize tracing
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("pubgate v{} starting", env!("CARGO_PKG_VERSION"));
    info!("Listening on {}", config.server.listen);

    if config.auth.key == "change-me" {
        warn!("Using default stream key, set PUBGATE_KEY or update config");
    }

    server::run(AppState::new(config)).await;
}
