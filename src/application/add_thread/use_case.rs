use crate::domain::{
    shared::errors::DomainError,
    thread::{
        entity::{AddThread, AddThreadPayload, AddedThread},
        repository::ThreadRepository,
    },
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    #[instrument(skip_all)]
    pub async fn execute(&self, payload: AddThreadPayload) -> Result<AddedThread, DomainError> {
        let add_thread = AddThread::new(payload)?;
        let added = self.thread_repository.add_thread(add_thread).await?;
        info!(thread_id = %added.id, owner = %added.owner, "Thread created");
        Ok(added)
    }
}
