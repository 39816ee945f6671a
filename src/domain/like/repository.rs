use super::entity::{Like, NewLike};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

const REPOSITORY: &str = "LIKE_REPOSITORY";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Fails with `DomainError::Conflict(LIKE_ALREADY_EXISTS)` when the owner
    /// already likes the comment.
    async fn add_like(&self, _like: NewLike) -> Result<Like, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Removing a like that does not exist is a no-op.
    async fn delete_like(&self, _comment_id: &str, _owner: &str) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    async fn find_like(&self, _comment_id: &str, _owner: &str) -> Result<Option<Like>, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    async fn get_like_count_by_comment_id(&self, _comment_id: &str) -> Result<u32, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }
}
