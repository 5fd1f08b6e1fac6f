//! HTTP server layer
//!
//! Axum server with:
//! - HTML list and detail pages
//! - Form (or JSON) post submission
//! - Request tracing
//! - Graceful shutdown
//! - Plain-text error responses

pub mod error;
pub mod extractors;
pub mod pages;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerError};
