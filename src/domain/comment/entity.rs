use crate::domain::shared::{
    errors::DomainError,
    validation::{self, Field},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shown in place of the content of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentPayload {
    pub content: Field,
    pub thread_id: Field,
    pub owner: Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    content: String,
    thread_id: String,
    owner: String,
}

impl AddComment {
    const ENTITY: &'static str = "ADD_COMMENT";

    pub fn new(payload: AddCommentPayload) -> Result<Self, DomainError> {
        validation::ensure_present(
            Self::ENTITY,
            &[&payload.content, &payload.thread_id, &payload.owner],
        )?;

        Ok(Self {
            content: validation::into_text(Self::ENTITY, payload.content)?,
            thread_id: validation::into_text(Self::ENTITY, payload.thread_id)?,
            owner: validation::into_text(Self::ENTITY, payload.owner)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentPayload {
    pub thread_id: Field,
    pub comment_id: Field,
    pub owner: Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    thread_id: String,
    comment_id: String,
    owner: String,
}

impl DeleteComment {
    const ENTITY: &'static str = "DELETE_COMMENT";

    pub fn new(payload: DeleteCommentPayload) -> Result<Self, DomainError> {
        validation::ensure_present(
            Self::ENTITY,
            &[&payload.thread_id, &payload.comment_id, &payload.owner],
        )?;

        Ok(Self {
            thread_id: validation::into_text(Self::ENTITY, payload.thread_id)?,
            comment_id: validation::into_text(Self::ENTITY, payload.comment_id)?,
            owner: validation::into_text(Self::ENTITY, payload.owner)?,
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// A comment row as stored, before redaction.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CommentRow {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// A comment as read back for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl From<CommentRow> for CommentView {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            date: row.created_at,
            content: if row.is_delete {
                DELETED_COMMENT_CONTENT.to_string()
            } else {
                row.content
            },
        }
    }
}
