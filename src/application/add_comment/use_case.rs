use crate::domain::{
    comment::{
        entity::{AddComment, AddCommentPayload, AddedComment},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(&self, payload: AddCommentPayload) -> Result<AddedComment, DomainError> {
        let add_comment = AddComment::new(payload)?;

        self.thread_repository
            .get_thread_by_id(add_comment.thread_id())
            .await?;

        let thread_id = add_comment.thread_id().to_string();
        let added = self.comment_repository.add_comment(add_comment).await?;
        info!(%thread_id, comment_id = %added.id, "Comment added");
        Ok(added)
    }
}
