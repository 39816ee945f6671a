use crate::domain::{
    shared::{
        errors::{DomainError, THREAD_NOT_FOUND},
        id_generator::{IdGenerator, entity_id},
    },
    thread::{
        entity::{AddThread, AddedThread, Thread},
        repository::ThreadRepository,
    },
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

pub struct SqlxThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl SqlxThreadRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for SqlxThreadRepository {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread, DomainError> {
        let id = entity_id("thread", self.id_generator.as_ref());
        sqlx::query_as::<_, AddedThread>(
            "INSERT INTO threads (id, title, body, owner) VALUES ($1, $2, $3, $4) \
             RETURNING id, title, owner",
        )
        .bind(&id)
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner())
        .fetch_one(&self.pool)
        .await
        .map_err(DomainError::infrastructure)
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<Thread, DomainError> {
        sqlx::query_as::<_, Thread>(
            "SELECT t.id, t.title, t.body, t.owner, \
                    COALESCE(u.username, t.owner) AS username, t.created_at \
             FROM threads t \
             LEFT JOIN users u ON u.id = t.owner \
             WHERE t.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::infrastructure)?
        .ok_or_else(|| DomainError::not_found(THREAD_NOT_FOUND))
    }
}
