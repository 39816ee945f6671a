use crate::domain::{
    comment::{
        entity::{DeleteComment, DeleteCommentPayload},
        repository::CommentRepository,
    },
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Soft-deletes a comment on behalf of its owner.
///
/// Checks run in order (thread exists, comment exists in that thread and is
/// owned by the caller) and the soft delete is the only mutation, issued last.
pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
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
    pub async fn execute(&self, payload: DeleteCommentPayload) -> Result<(), DomainError> {
        let delete_comment = DeleteComment::new(payload)?;

        self.thread_repository
            .get_thread_by_id(delete_comment.thread_id())
            .await?;
        self.comment_repository
            .verify_comment_owner(
                delete_comment.comment_id(),
                delete_comment.thread_id(),
                delete_comment.owner(),
            )
            .await?;
        self.comment_repository
            .delete_comment(delete_comment.comment_id())
            .await?;

        info!(comment_id = %delete_comment.comment_id(), "Comment soft-deleted");
        Ok(())
    }
}
