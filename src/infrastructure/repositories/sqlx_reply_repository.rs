use crate::domain::{
    reply::{
        entity::{AddReply, AddedReply, ReplyRow, ReplyView},
        repository::ReplyRepository,
    },
    shared::{
        errors::{DomainError, REPLY_NOT_FOUND},
        id_generator::{IdGenerator, entity_id},
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

pub struct SqlxReplyRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqlxReplyRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }

    /// Owner of the reply, if it exists under `comment_id`.
    async fn find_owner(&self, id: &str, comment_id: &str) -> Result<Option<String>, DomainError> {
        sqlx::query_scalar::<_, String>(
            "SELECT owner FROM replies WHERE id = $1 AND comment_id = $2",
        )
        .bind(id)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::infrastructure)
    }
}

#[async_trait]
impl ReplyRepository for SqlxReplyRepository {
    async fn add_reply(&self, reply: AddReply) -> Result<AddedReply, DomainError> {
        let id = entity_id("reply", self.id_generator.as_ref());
        sqlx::query_as::<_, AddedReply>(
            "INSERT INTO replies (id, content, comment_id, thread_id, owner) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, content, owner",
        )
        .bind(&id)
        .bind(reply.content())
        .bind(reply.comment_id())
        .bind(reply.thread_id())
        .bind(reply.owner())
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyView>, DomainError> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            "SELECT r.id, COALESCE(u.username, r.owner) AS username, \
                    r.created_at, r.content, r.is_delete \
             FROM replies r \
             LEFT JOIN users u ON u.id = r.owner \
             WHERE r.comment_id = $1 \
             ORDER BY r.created_at ASC, r.id ASC",
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?;

        Ok(rows.into_iter().map(ReplyView::from).collect())
    }

    async fn verify_reply_owner(
        &self,
        id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), DomainError> {
        match self.find_owner(id, comment_id).await? {
            None => Err(DomainError::not_found(REPLY_NOT_FOUND)),
            Some(stored) if stored != owner => Err(DomainError::not_owner()),
            Some(_) => Ok(()),
        }
    }

    async fn verify_reply_exist(&self, id: &str, comment_id: &str) -> Result<(), DomainError> {
        self.find_owner(id, comment_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(REPLY_NOT_FOUND))
    }

    async fn delete_reply(&self, id: &str) -> Result<(), DomainError> {
        sqlx::query("UPDATE replies SET is_delete = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        Ok(())
    }
}
