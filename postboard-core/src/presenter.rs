//! Summary and detail presentation of post content

use serde::Serialize;

use crate::post::Post;

/// Characters shown in the list view before truncation
pub const SUMMARY_LIMIT: usize = 200;

/// Appended to truncated content
pub const ELLIPSIS: &str = "...";

/// Content cut to `limit` characters plus [`ELLIPSIS`], or unchanged if it fits.
///
/// Length is counted in `char`s, so a multi-byte character is never split.
pub fn truncate(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Whether `truncate` would shorten this content
pub fn is_truncated(content: &str, limit: usize) -> bool {
    content.chars().nth(limit).is_some()
}

/// A post as shown in the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub user_name: String,
    pub excerpt: String,
    /// Full content only reachable through the detail view
    pub truncated: bool,
}

impl PostSummary {
    pub fn from_post(post: &Post, limit: usize) -> Self {
        Self {
            user_name: post.user_name.clone(),
            excerpt: truncate(&post.content, limit),
            truncated: is_truncated(&post.content, limit),
        }
    }
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self::from_post(post, SUMMARY_LIMIT)
    }
}
