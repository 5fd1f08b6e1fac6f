//! Command implementations for postboard CLI

pub mod posts;
pub mod serve;

// Re-export dispatcher functions for flat access from main.rs
pub use posts::{run_list, run_post, run_show};
pub use serve::run_serve;
