use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// What an author submits from the editor before it becomes an [`Article`].
///
/// [`Article`]: crate::Article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
}

impl ArticleDraft {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("article title cannot be empty"));
        }

        if self.content.trim().is_empty() {
            return Err(CoreError::validation("article content cannot be empty"));
        }

        Ok(())
    }
}
