use super::entity::{AddComment, AddedComment, CommentView};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

const REPOSITORY: &str = "COMMENT_REPOSITORY";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, _comment: AddComment) -> Result<AddedComment, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Fails with `COMMENT_NOT_FOUND` unless the comment exists in `thread_id`.
    async fn verify_comment_exist(&self, _id: &str, _thread_id: &str) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Fails with `COMMENT_NOT_FOUND` unless the comment exists in `thread_id`,
    /// then `NOT_OWNER` when the stored owner differs.
    async fn verify_comment_owner(
        &self,
        _id: &str,
        _thread_id: &str,
        _owner: &str,
    ) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Soft delete. Deleting an already deleted comment is not an error.
    async fn delete_comment(&self, _id: &str) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Oldest first, content redacted for soft-deleted rows.
    async fn get_comments_by_thread_id(
        &self,
        _thread_id: &str,
    ) -> Result<Vec<CommentView>, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }
}
