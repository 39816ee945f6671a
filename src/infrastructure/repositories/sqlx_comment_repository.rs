use crate::domain::{
    comment::{
        entity::{AddComment, AddedComment, CommentRow, CommentView},
        repository::CommentRepository,
    },
    shared::{
        errors::{COMMENT_NOT_FOUND, DomainError},
        id_generator::{IdGenerator, entity_id},
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

pub struct SqlxCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqlxCommentRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }

    /// Owner of the comment, if it exists within `thread_id`.
    async fn find_owner(&self, id: &str, thread_id: &str) -> Result<Option<String>, DomainError> {
        sqlx::query_scalar::<_, String>(
            "SELECT owner FROM comments WHERE id = $1 AND thread_id = $2",
        )
        .bind(id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::infrastructure)
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment, DomainError> {
        let id = entity_id("comment", self.id_generator.as_ref());
        sqlx::query_as::<_, AddedComment>(
            "INSERT INTO comments (id, content, thread_id, owner) VALUES ($1, $2, $3, $4) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(comment.content())
        .bind(comment.thread_id())
        .bind(comment.owner())
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)
    }

    async fn verify_comment_exist(&self, id: &str, thread_id: &str) -> Result<(), DomainError> {
        self.find_owner(id, thread_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(COMMENT_NOT_FOUND))
    }

    async fn verify_comment_owner(
        &self,
        id: &str,
        thread_id: &str,
        owner: &str,
    ) -> Result<(), DomainError> {
        match self.find_owner(id, thread_id).await? {
            None => Err(DomainError::not_found(COMMENT_NOT_FOUND)),
            Some(stored) if stored != owner => Err(DomainError::not_owner()),
            Some(_) => Ok(()),
        }
    }

    async fn delete_comment(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE comments SET is_delete = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentView>, DomainError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, COALESCE(u.username, c.owner) AS username, \
                    c.created_at, c.content, c.is_delete \
             FROM comments c \
             LEFT JOIN users u ON u.id = c.owner \
             WHERE c.thread_id = $1 \
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(rows.into_iter().map(CommentView::from).collect())
    }
}
