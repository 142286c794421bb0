//! # RuleBot HTTP Server
//!
//! File: cli/src/commands/srv/mod.rs
//!
//! ## Overview
//!
//! This module exposes the responder over HTTP so a browser chat UI (or any
//! other client) can post messages and receive bot replies. It provides:
//! - `POST /api/messages`: classify `{"text": "..."}` and return a bot message
//! - `GET /api/rules`: the rule names in priority order
//! - `GET /health`: liveness probe
//! - Port binding with automatic fallback if the port is in use
//! - Optional permissive CORS
//!
//! ## Architecture
//!
//! - `config.rs`: merges `SrvArgs` with the `[srv]` config section
//! - `api.rs`: request/response types and the route handlers
//! - `server_logic.rs`: router assembly, port search, graceful shutdown
//!
//! ## Examples
//!
//! ```bash
//! # Serve on the configured (or default 8000) port
//! rulebot srv
//!
//! # Bind all interfaces, no CORS, reproducible replies
//! rulebot srv --host 0.0.0.0 --port 9000 --no-cors --seed 1
//!
//! curl -s localhost:8000/api/messages -H 'content-type: application/json' \
//!      -d '{"text":"what is 5 + 3"}'
//! ```
//!
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Merges command-line arguments with the `[srv]` config section.
pub mod config;

/// Route handlers and JSON payloads.
pub mod api;

/// Axum router, port search and shutdown handling.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// Entry point for `rulebot srv`: resolves the effective configuration and
/// runs the server until Ctrl+C or SIGTERM.
pub async fn handle_srv(args: SrvArgs) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let config = config::load_and_merge_config(args)?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;
    Ok(())
}
