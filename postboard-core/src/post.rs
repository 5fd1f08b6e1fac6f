//! The post record

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A user-submitted (name, content) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_name: String,
    pub content: String,
}

impl Post {
    pub fn new(user_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            content: content.into(),
        }
    }

    /// Build a post from submitted fields, rejecting absent or empty ones.
    ///
    /// Whitespace-only values are accepted; only the empty string is refused.
    pub fn from_submission(
        user_name: Option<String>,
        content: Option<String>,
    ) -> Result<Self, ValidationError> {
        let user_name = user_name
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingField { field: "userName" })?;
        let content = content
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingField {
                field: "postContent",
            })?;

        Ok(Self { user_name, content })
    }
}
