use crate::domain::{
    like::{
        entity::{Like, NewLike},
        repository::LikeRepository,
    },
    shared::{
        errors::{DomainError, LIKE_ALREADY_EXISTS},
        id_generator::{IdGenerator, entity_id},
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

const UNIQUE_VIOLATION: &str = "23505";

pub struct SqlxLikeRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn add_like(&self, like: NewLike) -> Result<Like, DomainError> {
        let id = entity_id("like", self.id_generator.as_ref());
        sqlx::query_as::<_, Like>(
            "INSERT INTO likes (id, comment_id, owner) VALUES ($1, $2, $3) \
             RETURNING id, comment_id, owner",
        )
        .bind(&id)
        .bind(&like.comment_id)
        .bind(&like.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return DomainError::Conflict(LIKE_ALREADY_EXISTS.to_string());
                }
            }
            DomainError::infrastructure(e)
        })
    }

    async fn delete_like(&self, comment_id: &str, owner: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM likes WHERE comment_id = $1 AND owner = $2")
            .bind(comment_id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        Ok(())
    }

    async fn find_like(&self, comment_id: &str, owner: &str) -> Result<Option<Like>, DomainError> {
        sqlx::query_as::<_, Like>(
            "SELECT id, comment_id, owner FROM likes WHERE comment_id = $1 AND owner = $2",
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::infrastructure)
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u32, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM likes WHERE comment_id = $1")
            .bind(comment_id)
            .fetch_one(&self.pool)
            .await
            .map_err(DomainError::infrastructure)?;
        u32::try_from(count).map_err(DomainError::infrastructure)
    }
}
