use crate::domain::{
    comment::repository::CommentRepository,
    reply::{
        entity::{AddReply, AddReplyPayload, AddedReply},
        repository::ReplyRepository,
    },
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
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
    pub async fn execute(&self, payload: AddReplyPayload) -> Result<AddedReply, DomainError> {
        let add_reply = AddReply::new(payload)?;

        self.thread_repository
            .get_thread_by_id(add_reply.thread_id())
            .await?;
        self.comment_repository
            .verify_comment_exist(add_reply.comment_id(), add_reply.thread_id())
            .await?;

        let comment_id = add_reply.comment_id().to_string();
        let added = self.reply_repository.add_reply(add_reply).await?;
        info!(%comment_id, reply_id = %added.id, "Reply added");
        Ok(added)
    }
}
