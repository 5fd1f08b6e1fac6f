//! HTTP server command
//!
//! Runs the board's web front end on the configured port.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_core::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_POSTS_FILE};
use postboard_core::BoardConfig;
use postboard_server::run_server;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Flat file the posts are stored in
    #[arg(long, env = "POSTS_FILE", default_value = DEFAULT_POSTS_FILE)]
    pub posts_file: PathBuf,
}

impl From<ServeArgs> for BoardConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            posts_file: args.posts_file,
        }
    }
}

/// Run the HTTP server (blocks until shutdown)
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = BoardConfig::from(args);
    tracing::debug!(?config, "Starting postboard server");

    run_server(config).await.context("Server error")?;

    Ok(())
}
