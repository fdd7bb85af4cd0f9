//! `roster-api` binary entrypoint.
//!
//! Loads configuration from environment variables, loads the member
//! roster, and starts the HTTP server.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::sync::Arc;

use anyhow::{Context, Result};

use roster_api::config::Config;
use roster_api::server::Server;
use roster_core::MemberDirectory;
use roster_core::observability::{LogFormat, init_logging};

/// Sample roster used as the debug-mode fallback data source.
const DEFAULT_ROSTER: &str = include_str!("../data/members.json");

fn choose_log_format(config: &Config) -> LogFormat {
    if config.debug {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_logging(choose_log_format(&config));

    let directory = if let Some(path) = config.members_path.as_deref() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read member roster from {path}"))?;
        let directory = MemberDirectory::from_json_str(&raw)?;
        tracing::info!(path = %path, members = directory.len(), "Loaded member roster");
        directory
    } else {
        if !config.debug {
            anyhow::bail!("ROSTER_MEMBERS_PATH is required when ROSTER_DEBUG=false");
        }
        tracing::warn!("ROSTER_MEMBERS_PATH not set; using embedded sample roster (debug only)");
        MemberDirectory::from_json_str(DEFAULT_ROSTER)?
    };

    let server = Server::with_directory(config, Arc::new(directory));
    server.serve().await?;
    Ok(())
}
