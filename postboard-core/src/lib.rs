//! postboard-core: posts, their flat-file store, and how they are shown
//!
//! - `codec`: the `user|content` line format
//! - `store`: `PostStore` trait with file and in-memory backends
//! - `lookup`: first post by user name
//! - `presenter`: summary truncation

pub mod codec;
pub mod config;
pub mod error;
pub mod lookup;
pub mod post;
pub mod presenter;
pub mod store;

pub use codec::{decode_records, encode_record, parse_line, ParsedLine};
pub use config::BoardConfig;
pub use error::{Result, StoreError, ValidationError};
pub use lookup::{find_by_user_name, first_by_user_name};
pub use post::Post;
pub use presenter::{is_truncated, truncate, PostSummary, ELLIPSIS, SUMMARY_LIMIT};
pub use store::{FilePostStore, MemoryPostStore, PostStore};
