use super::dto::LikeAction;
use crate::domain::{
    comment::repository::CommentRepository,
    like::{
        entity::{LikeComment, LikeCommentPayload},
        repository::LikeRepository,
    },
    shared::errors::DomainError,
    thread::repository::ThreadRepository,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Toggles the caller's like on a comment.
///
/// The transition is inferred from persisted state: an existing like is
/// removed, a missing one is created. Two identical requests therefore toggle
/// twice. A concurrent toggle can insert the like between our lookup and our
/// insert; the storage uniqueness constraint rejects the duplicate and the
/// toggle resolves as `Liked`, since the like now exists.
pub struct LikeCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl LikeCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            like_repository,
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(&self, payload: LikeCommentPayload) -> Result<LikeAction, DomainError> {
        let like_comment = LikeComment::new(payload)?;
        let comment_id = like_comment.comment_id();
        let owner = like_comment.owner();

        self.thread_repository
            .get_thread_by_id(like_comment.thread_id())
            .await?;
        self.comment_repository
            .verify_comment_exist(comment_id, like_comment.thread_id())
            .await?;

        if self
            .like_repository
            .find_like(comment_id, owner)
            .await?
            .is_some()
        {
            self.like_repository.delete_like(comment_id, owner).await?;
            info!(%comment_id, %owner, "Comment unliked");
            return Ok(LikeAction::Unliked);
        }

        match self.like_repository.add_like(like_comment.to_new_like()).await {
            Ok(like) => {
                info!(%comment_id, %owner, like_id = %like.id, "Comment liked");
                Ok(LikeAction::Liked)
            }
            Err(DomainError::Conflict(signal)) => {
                debug!(%comment_id, %owner, %signal, "Like already recorded by a concurrent toggle");
                Ok(LikeAction::Liked)
            }
            Err(e) => Err(e),
        }
    }
}
