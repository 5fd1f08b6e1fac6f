//! Post commands - read and write the posts file directly
//!
//! Commands: list, post, show
//!
//! ```bash
//! postboard post --name alice --content "hello"
//! postboard list --json | jq '.[].userName'
//! postboard show alice
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use postboard_core::config::DEFAULT_POSTS_FILE;
use postboard_core::{find_by_user_name, FilePostStore, Post, PostStore, PostSummary};

/// Location of the posts file (shared by every post command)
#[derive(Parser, Debug)]
pub struct StoreArgs {
    /// Flat file the posts are stored in
    #[arg(long, env = "POSTS_FILE", default_value = DEFAULT_POSTS_FILE)]
    pub posts_file: PathBuf,
}

impl StoreArgs {
    fn open(&self) -> FilePostStore {
        FilePostStore::new(&self.posts_file)
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Print full posts as JSON instead of summaries
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct PostArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Author name
    #[arg(long, short)]
    pub name: String,

    /// Post text
    #[arg(long, short)]
    pub content: String,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// User whose first post to show
    pub name: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// List every post, oldest first
pub async fn run_list(args: ListArgs) -> Result<()> {
    let posts = args
        .store
        .open()
        .read_all()
        .await
        .context("Failed to read posts")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("No posts yet.");
        return Ok(());
    }

    for summary in posts.iter().map(PostSummary::from) {
        println!("{}: {}", summary.user_name, summary.excerpt);
    }
    Ok(())
}

/// Append one post after the same validation the web form gets
pub async fn run_post(args: PostArgs) -> Result<()> {
    let post = Post::from_submission(Some(args.name), Some(args.content))?;

    args.store
        .open()
        .append(&post)
        .await
        .context("Failed to save post")?;

    tracing::info!(user = %post.user_name, "Post saved");
    Ok(())
}

/// Show the first post by a user in full
pub async fn run_show(args: ShowArgs) -> Result<()> {
    let store = args.store.open();
    let post = find_by_user_name(&store, &args.name)
        .await
        .context("Failed to read posts")?
        .ok_or_else(|| anyhow!("Post not found"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!("Post by {}\n\n{}", post.user_name, post.content);
    }
    Ok(())
}
