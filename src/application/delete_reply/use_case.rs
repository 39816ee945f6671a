use crate::domain::{
    comment::repository::CommentRepository,
    reply::{
        entity::{DeleteReply, DeleteReplyPayload},
        repository::ReplyRepository,
    },
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(&self, payload: DeleteReplyPayload) -> Result<(), DomainError> {
        let delete_reply = DeleteReply::new(payload)?;

        self.thread_repository
            .get_thread_by_id(delete_reply.thread_id())
            .await?;
        self.comment_repository
            .verify_comment_exist(delete_reply.comment_id(), delete_reply.thread_id())
            .await?;
        self.reply_repository
            .verify_reply_owner(
                delete_reply.reply_id(),
                delete_reply.comment_id(),
                delete_reply.owner(),
            )
            .await?;
        self.reply_repository
            .delete_reply(delete_reply.reply_id())
            .await?;

        info!(reply_id = %delete_reply.reply_id(), "Reply soft-deleted");
        Ok(())
    }
}
