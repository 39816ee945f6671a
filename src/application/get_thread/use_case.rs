use super::dto::{CommentDetail, ThreadDetail};
use crate::domain::{
    comment::{entity::CommentView, repository::CommentRepository},
    like::repository::LikeRepository,
    reply::repository::ReplyRepository,
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use futures_util::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Assembles a thread with its comments, each comment's replies and like count.
///
/// The thread lookup runs first and short-circuits everything else. Per-comment
/// lookups are independent and run concurrently; the output keeps the
/// repository's ordering regardless of which lookup finishes first, and the
/// first failing lookup fails the whole call.
pub struct GetThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl GetThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            like_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, thread_id: &str) -> Result<ThreadDetail, DomainError> {
        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_id(thread_id)
            .await?;
        debug!(comment_count = comments.len(), "Loading replies and likes");

        let comments = try_join_all(
            comments
                .into_iter()
                .map(|comment| self.with_replies_and_likes(comment)),
        )
        .await?;

        Ok(ThreadDetail {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.created_at,
            username: thread.username,
            comments,
        })
    }

    async fn with_replies_and_likes(
        &self,
        comment: CommentView,
    ) -> Result<CommentDetail, DomainError> {
        let (replies, like_count) = tokio::try_join!(
            self.reply_repository.get_replies_by_comment_id(&comment.id),
            self.like_repository
                .get_like_count_by_comment_id(&comment.id),
        )?;

        Ok(CommentDetail {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content: comment.content,
            replies,
            like_count,
        })
    }
}
