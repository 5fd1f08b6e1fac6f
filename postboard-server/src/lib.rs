//! postboard-server: HTTP front end for the message board
//!
//! Serves the post list with its submission form, accepts new posts and
//! shows a single post in full. Storage is whatever `PostStore` the
//! `AppState` is built with.

pub mod http;
pub mod state;

pub use http::{build_router, run_server, ApiError, ServerError};
pub use state::AppState;
