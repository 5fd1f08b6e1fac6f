//! postboard CLI - a flat-file message board
//!
//! - `serve`: run the web board (list, submit, read more)
//! - `list` / `post` / `show`: work with the posts file from the shell

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::posts::{ListArgs, PostArgs, ShowArgs};
use commands::serve::ServeArgs;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "postboard",
    author,
    version,
    about = "Minimal message board backed by a single flat file"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// List all posts, oldest first
    List(ListArgs),
    /// Add a post
    Post(PostArgs),
    /// Show the first post by a user
    Show(ShowArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is normal; values already in the environment win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::List(args) => commands::run_list(args).await?,
        Commands::Post(args) => commands::run_post(args).await?,
        Commands::Show(args) => commands::run_show(args).await?,
    }

    Ok(())
}
