//! Board configuration - bind address and posts file
//!
//! The CLI fills this from flags or the `PORT`, `HOST` and `POSTS_FILE`
//! environment variables; the defaults live here so both agree:
//! - port 3000
//! - host 0.0.0.0
//! - posts file ./posts.txt

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_POSTS_FILE: &str = "./posts.txt";

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub host: String,
    pub port: u16,
    pub posts_file: PathBuf,
}

impl BoardConfig {
    /// `host:port` for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// URL printed at startup
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            posts_file: PathBuf::from(DEFAULT_POSTS_FILE),
        }
    }
}
