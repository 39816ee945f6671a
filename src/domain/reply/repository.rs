use super::entity::{AddReply, AddedReply, ReplyView};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

const REPOSITORY: &str = "REPLY_REPOSITORY";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, _reply: AddReply) -> Result<AddedReply, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Oldest first, content redacted for soft-deleted rows.
    async fn get_replies_by_comment_id(
        &self,
        _comment_id: &str,
    ) -> Result<Vec<ReplyView>, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Fails with `REPLY_NOT_FOUND` unless the reply belongs to `comment_id`,
    /// then `NOT_OWNER`.
    async fn verify_reply_owner(
        &self,
        _id: &str,
        _comment_id: &str,
        _owner: &str,
    ) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    async fn verify_reply_exist(&self, _id: &str, _comment_id: &str) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    async fn delete_reply(&self, _id: &str) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }
}
