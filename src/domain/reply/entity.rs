use crate::domain::shared::{
    errors::DomainError,
    validation::{self, Field},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Shown in place of the content of a soft-deleted reply.
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReplyPayload {
    pub content: Field,
    pub comment_id: Field,
    pub thread_id: Field,
    pub owner: Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReply {
    content: String,
    comment_id: String,
    thread_id: String,
    owner: String,
}

impl AddReply {
    const ENTITY: &'static str = "ADD_REPLY";

    pub fn new(payload: AddReplyPayload) -> Result<Self, DomainError> {
        validation::ensure_present(
            Self::ENTITY,
            &[
                &payload.content,
                &payload.comment_id,
                &payload.thread_id,
                &payload.owner,
            ],
        )?;

        Ok(Self {
            content: validation::into_text(Self::ENTITY, payload.content)?,
            comment_id: validation::into_text(Self::ENTITY, payload.comment_id)?,
            thread_id: validation::into_text(Self::ENTITY, payload.thread_id)?,
            owner: validation::into_text(Self::ENTITY, payload.owner)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
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
pub struct DeleteReplyPayload {
    pub thread_id: Field,
    pub comment_id: Field,
    pub reply_id: Field,
    pub owner: Field,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
    thread_id: String,
    comment_id: String,
    reply_id: String,
    owner: String,
}

impl DeleteReply {
    const ENTITY: &'static str = "DELETE_REPLY";

    pub fn new(payload: DeleteReplyPayload) -> Result<Self, DomainError> {
        validation::ensure_present(
            Self::ENTITY,
            &[
                &payload.thread_id,
                &payload.comment_id,
                &payload.reply_id,
                &payload.owner,
            ],
        )?;

        Ok(Self {
            thread_id: validation::into_text(Self::ENTITY, payload.thread_id)?,
            comment_id: validation::into_text(Self::ENTITY, payload.comment_id)?,
            reply_id: validation::into_text(Self::ENTITY, payload.reply_id)?,
            owner: validation::into_text(Self::ENTITY, payload.owner)?,
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn reply_id(&self) -> &str {
        &self.reply_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ReplyRow {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReplyView {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
}

impl From<ReplyRow> for ReplyView {
    fn from(row: ReplyRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            date: row.created_at,
            content: if row.is_delete {
                DELETED_REPLY_CONTENT.to_string()
            } else {
                row.content
            },
        }
    }
}
