//! Line codec for the posts file
//!
//! One post per line, `user_name|content`, each record terminated by `\n`.
//! Fields are written verbatim: a `|` or newline inside a field produces a
//! line that reads back as malformed (or as several), and is skipped.

use crate::post::Post;

/// Separates `user_name` from `content` within a record
pub const RECORD_DELIMITER: char = '|';

/// Terminates every record
pub const RECORD_TERMINATOR: char = '\n';

/// Outcome of parsing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// Exactly two non-empty fields
    Record(Post),
    /// Blank, partial or ambiguous line
    Skip,
}

impl ParsedLine {
    pub fn into_post(self) -> Option<Post> {
        match self {
            Self::Record(post) => Some(post),
            Self::Skip => None,
        }
    }
}

/// Parse one line (without its terminator)
pub fn parse_line(line: &str) -> ParsedLine {
    let mut fields = line.split(RECORD_DELIMITER);

    match (fields.next(), fields.next(), fields.next()) {
        (Some(user_name), Some(content), None) if !user_name.is_empty() && !content.is_empty() => {
            ParsedLine::Record(Post::new(user_name, content))
        }
        _ => ParsedLine::Skip,
    }
}

/// Serialize a post as a terminated record
pub fn encode_record(post: &Post) -> String {
    format!(
        "{}{}{}{}",
        post.user_name, RECORD_DELIMITER, post.content, RECORD_TERMINATOR
    )
}

/// Parse a whole file, keeping well-formed records in file order
pub fn decode_records(text: &str) -> Vec<Post> {
    text.lines()
        .filter_map(|line| parse_line(line).into_post())
        .collect()
}
