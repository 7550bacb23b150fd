use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from a validated draft, assigning id and timestamp.
    pub fn new(draft: PostDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            created_at: Utc::now(),
        }
    }

    /// Replace title and content. `id` and `created_at` never change.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
    }
}

/// The user-editable fields of a post, trimmed and checked.
///
/// A `PostDraft` can only be obtained through [`PostDraft::parse`], so holding
/// one means both fields are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
}

impl PostDraft {
    /// Trim both fields and reject either one being empty.
    pub fn parse(title: &str, content: &str) -> Result<Self, DomainError> {
        let title = title.trim();
        let content = content.trim();

        let mut missing = Vec::new();
        if title.is_empty() {
            missing.push("Title is required");
        }
        if content.is_empty() {
            missing.push("Content is required");
        }
        if !missing.is_empty() {
            return Err(DomainError::Validation(missing.join(", ")));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
