//! # RuleBot HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//!
//! ## Overview
//!
//! Combines settings for `rulebot srv` from:
//! 1. Command-line arguments (highest priority)
//! 2. The `[srv]` and `[responder]` sections of the loaded configuration
//! 3. Default values (lowest priority)
//!
//! Flags that were not given on the command line are `None`, so any value the
//! user did type always wins over the config file.
//!
use crate::core::config::{self, Config, ResponderConfig};
use crate::core::error::Result;
use clap::Parser;
use std::net::IpAddr;
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
#[derive(Parser, Debug)]
pub struct SrvArgs {
    /// Port to listen on. Defaults to `[srv] port` (8000).
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind. Use `0.0.0.0` for all interfaces. Defaults to `[srv] host` (127.0.0.1).
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Fixed seed for random replies (overrides `[responder] seed`).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    pub enable_cors: bool,
    pub responder: ResponderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_parts(&SrvArgs::parse_from(["srv"]), Config::default())
    }
}

impl ServerConfig {
    /// Applies `args` on top of an already loaded `Config`.
    pub fn from_parts(args: &SrvArgs, cfg: Config) -> Self {
        let mut responder = cfg.responder;
        if args.seed.is_some() {
            responder.seed = args.seed;
        }
        Self {
            port: args.port.unwrap_or(cfg.srv.port),
            host: args.host.unwrap_or(cfg.srv.host),
            enable_cors: cfg.srv.enable_cors && !args.no_cors,
            responder,
        }
    }
}

/// Loads the RuleBot configuration and merges `args` into it.
pub fn load_and_merge_config(args: SrvArgs) -> Result<ServerConfig> {
    let cfg = config::load_config()?;
    debug!("Merging srv arguments into loaded configuration");
    Ok(ServerConfig::from_parts(&args, cfg))
}
