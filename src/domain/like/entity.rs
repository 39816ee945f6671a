use crate::domain::shared::{
    errors::DomainError,
    validation::{self, Field},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCommentPayload {
    pub thread_id: Field,
    pub comment_id: Field,
    pub owner: Field,
}

/// Validated like-toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeComment {
    thread_id: String,
    comment_id: String,
    owner: String,
}

impl LikeComment {
    const ENTITY: &'static str = "LIKE_COMMENT";

    pub fn new(payload: LikeCommentPayload) -> Result<Self, DomainError> {
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

    pub fn to_new_like(&self) -> NewLike {
        NewLike {
            comment_id: self.comment_id.clone(),
            owner: self.owner.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLike {
    pub comment_id: String,
    pub owner: String,
}

/// At most one exists per `(comment_id, owner)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub id: String,
    pub comment_id: String,
    pub owner: String,
}
