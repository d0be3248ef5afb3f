use crate::ArticleDraft;
use crate::models::nullable::null_as_default;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display format of the publish date, e.g. `Oct 17, 2026`.
pub const DATE_FORMAT: &str = "%b %-d, %Y";

/// Reading speed used for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Length of an excerpt derived from the article body.
pub const EXCERPT_CHARS: usize = 160;

/// One authored content item.
///
/// `date` and `read_time` are display strings, not timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub read_time: String,
}

impl Article {
    /// Build a publishable article from a draft.
    ///
    /// The author name is copied; renaming the member later does not touch
    /// articles already written.
    pub fn compose(draft: ArticleDraft, author: &str, now: DateTime<Utc>) -> Self {
        let ArticleDraft {
            title,
            excerpt,
            content,
            category,
        } = draft;

        let excerpt = if excerpt.trim().is_empty() {
            derive_excerpt(&content)
        } else {
            excerpt
        };

        Self {
            id: Uuid::new_v4().to_string(),
            title,
            excerpt,
            read_time: estimate_read_time(&content),
            content,
            author: author.to_string(),
            date: now.format(DATE_FORMAT).to_string(),
            category,
        }
    }

    /// An article without a usable id cannot be stored.
    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// `"<n> min read"`, rounded up, never below one minute.
pub fn estimate_read_time(content: &str) -> String {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// First [`EXCERPT_CHARS`] characters of the body, with an ellipsis when cut.
pub fn derive_excerpt(content: &str) -> String {
    let content = content.trim();

    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", content[..cut].trim_end()),
        None => content.to_string(),
    }
}
