use super::entity::{AddThread, AddedThread, Thread};
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;

const REPOSITORY: &str = "THREAD_REPOSITORY";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, _thread: AddThread) -> Result<AddedThread, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }

    /// Fails with `THREAD_NOT_FOUND` when no thread has this id.
    async fn get_thread_by_id(&self, _id: &str) -> Result<Thread, DomainError> {
        Err(DomainError::not_implemented(REPOSITORY))
    }
}
