//! In-process storage backend implementing every repository contract.
//!
//! Mirrors the relational schema closely enough for development and tests:
//! rows keep insertion (creation) order, soft deletes flip `is_delete`,
//! foreign keys are checked on insert (a reply's thread must be its
//! comment's thread) and `(comment_id, owner)` is unique for likes. All
//! tables sit behind one lock, so each repository call is atomic with
//! respect to the others.

use crate::domain::{
    comment::{
        entity::{AddComment, AddedComment, CommentRow, CommentView},
        repository::CommentRepository,
    },
    like::{
        entity::{Like, NewLike},
        repository::LikeRepository,
    },
    reply::{
        entity::{AddReply, AddedReply, ReplyRow, ReplyView},
        repository::ReplyRepository,
    },
    shared::{
        errors::{COMMENT_NOT_FOUND, DomainError, LIKE_ALREADY_EXISTS, REPLY_NOT_FOUND, THREAD_NOT_FOUND},
        id_generator::{IdGenerator, entity_id},
    },
    thread::{
        entity::{AddThread, AddedThread, Thread},
        repository::ThreadRepository,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct StoredComment {
    id: String,
    content: String,
    thread_id: String,
    owner: String,
    created_at: DateTime<Utc>,
    is_delete: bool,
}

#[derive(Debug, Clone)]
struct StoredReply {
    id: String,
    content: String,
    comment_id: String,
    owner: String,
    created_at: DateTime<Utc>,
    is_delete: bool,
}

#[derive(Debug, Default)]
struct Tables {
    usernames: HashMap<String, String>,
    threads: Vec<StoredThread>,
    comments: Vec<StoredComment>,
    replies: Vec<StoredReply>,
    likes: Vec<Like>,
}

impl Tables {
    fn username(&self, owner: &str) -> String {
        self.usernames
            .get(owner)
            .cloned()
            .unwrap_or_else(|| owner.to_string())
    }

    fn comment(&self, id: &str) -> Option<&StoredComment> {
        self.comments.iter().find(|c| c.id == id)
    }

    fn comment_in_thread(&self, id: &str, thread_id: &str) -> Option<&StoredComment> {
        self.comment(id).filter(|c| c.thread_id == thread_id)
    }

    fn reply(&self, id: &str) -> Option<&StoredReply> {
        self.replies.iter().find(|r| r.id == id)
    }

    fn reply_under_comment(&self, id: &str, comment_id: &str) -> Option<&StoredReply> {
        self.reply(id).filter(|r| r.comment_id == comment_id)
    }
}

fn foreign_key_violation(column: &str) -> DomainError {
    DomainError::InfrastructureError(format!("foreign key violation on {column}"))
}

pub struct MemoryForumStore {
    tables: RwLock<Tables>,
    id_generator: Arc<dyn IdGenerator>,
}

impl MemoryForumStore {
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
            id_generator,
        }
    }

    /// Records the username shown for `user_id` on threads, comments and replies.
    pub async fn register_user(&self, user_id: &str, username: &str) {
        self.tables
            .write()
            .await
            .usernames
            .insert(user_id.to_string(), username.to_string());
    }

    /// The raw `is_delete` flag of a comment, `None` if it does not exist.
    pub async fn comment_is_deleted(&self, id: &str) -> Option<bool> {
        self.tables.read().await.comment(id).map(|c| c.is_delete)
    }

    /// The raw `is_delete` flag of a reply, `None` if it does not exist.
    pub async fn reply_is_deleted(&self, id: &str) -> Option<bool> {
        self.tables.read().await.reply(id).map(|r| r.is_delete)
    }

    fn next_id(&self, kind: &str) -> String {
        entity_id(kind, self.id_generator.as_ref())
    }
}

#[async_trait]
impl ThreadRepository for MemoryForumStore {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread, DomainError> {
        let stored = StoredThread {
            id: self.next_id("thread"),
            title: thread.title().to_string(),
            body: thread.body().to_string(),
            owner: thread.owner().to_string(),
            created_at: Utc::now(),
        };
        let added = AddedThread {
            id: stored.id.clone(),
            title: stored.title.clone(),
            owner: stored.owner.clone(),
        };
        self.tables.write().await.threads.push(stored);
        Ok(added)
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<Thread, DomainError> {
        let tables = self.tables.read().await;
        let thread = tables
            .threads
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::not_found(THREAD_NOT_FOUND))?;

        Ok(Thread {
            id: thread.id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            owner: thread.owner.clone(),
            username: tables.username(&thread.owner),
            created_at: thread.created_at,
        })
    }
}

#[async_trait]
impl CommentRepository for MemoryForumStore {
    async fn add_comment(&self, comment: AddComment) -> Result<AddedComment, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.threads.iter().any(|t| t.id == comment.thread_id()) {
            return Err(foreign_key_violation("comments.thread_id"));
        }

        let stored = StoredComment {
            id: self.next_id("comment"),
            content: comment.content().to_string(),
            thread_id: comment.thread_id().to_string(),
            owner: comment.owner().to_string(),
            created_at: Utc::now(),
            is_delete: false,
        };
        let added = AddedComment {
            id: stored.id.clone(),
            content: stored.content.clone(),
            owner: stored.owner.clone(),
        };
        tables.comments.push(stored);
        Ok(added)
    }

    async fn verify_comment_exist(&self, id: &str, thread_id: &str) -> Result<(), DomainError> {
        self.tables
            .read()
            .await
            .comment_in_thread(id, thread_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(COMMENT_NOT_FOUND))
    }

    async fn verify_comment_owner(
        &self,
        id: &str,
        thread_id: &str,
        owner: &str,
    ) -> Result<(), DomainError> {
        match self.tables.read().await.comment_in_thread(id, thread_id) {
            None => Err(DomainError::not_found(COMMENT_NOT_FOUND)),
            Some(comment) if comment.owner != owner => Err(DomainError::not_owner()),
            Some(_) => Ok(()),
        }
    }

    async fn delete_comment(&self, id: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(comment) = tables.comments.iter_mut().find(|c| c.id == id) {
            comment.is_delete = true;
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|c| c.thread_id == thread_id)
            .map(|c| {
                CommentView::from(CommentRow {
                    id: c.id.clone(),
                    username: tables.username(&c.owner),
                    created_at: c.created_at,
                    content: c.content.clone(),
                    is_delete: c.is_delete,
                })
            })
            .collect())
    }
}

#[async_trait]
impl ReplyRepository for MemoryForumStore {
    async fn add_reply(&self, reply: AddReply) -> Result<AddedReply, DomainError> {
        let mut tables = self.tables.write().await;
        if tables
            .comment_in_thread(reply.comment_id(), reply.thread_id())
            .is_none()
        {
            return Err(foreign_key_violation("replies.(comment_id, thread_id)"));
        }

        let stored = StoredReply {
            id: self.next_id("reply"),
            content: reply.content().to_string(),
            comment_id: reply.comment_id().to_string(),
            owner: reply.owner().to_string(),
            created_at: Utc::now(),
            is_delete: false,
        };
        let added = AddedReply {
            id: stored.id.clone(),
            content: stored.content.clone(),
            owner: stored.owner.clone(),
        };
        tables.replies.push(stored);
        Ok(added)
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyView>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables
            .replies
            .iter()
            .filter(|r| r.comment_id == comment_id)
            .map(|r| {
                ReplyView::from(ReplyRow {
                    id: r.id.clone(),
                    username: tables.username(&r.owner),
                    created_at: r.created_at,
                    content: r.content.clone(),
                    is_delete: r.is_delete,
                })
            })
            .collect())
    }

    async fn verify_reply_owner(
        &self,
        id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<(), DomainError> {
        match self.tables.read().await.reply_under_comment(id, comment_id) {
            None => Err(DomainError::not_found(REPLY_NOT_FOUND)),
            Some(reply) if reply.owner != owner => Err(DomainError::not_owner()),
            Some(_) => Ok(()),
        }
    }

    async fn verify_reply_exist(&self, id: &str, comment_id: &str) -> Result<(), DomainError> {
        self.tables
            .read()
            .await
            .reply_under_comment(id, comment_id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(REPLY_NOT_FOUND))
    }

    async fn delete_reply(&self, id: &str) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if let Some(reply) = tables.replies.iter_mut().find(|r| r.id == id) {
            reply.is_delete = true;
        }
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for MemoryForumStore {
    async fn add_like(&self, like: NewLike) -> Result<Like, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.comment(&like.comment_id).is_none() {
            return Err(foreign_key_violation("likes.comment_id"));
        }
        if tables
            .likes
            .iter()
            .any(|l| l.comment_id == like.comment_id && l.owner == like.owner)
        {
            return Err(DomainError::Conflict(LIKE_ALREADY_EXISTS.to_string()));
        }

        let stored = Like {
            id: self.next_id("like"),
            comment_id: like.comment_id,
            owner: like.owner,
        };
        tables.likes.push(stored.clone());
        Ok(stored)
    }

    async fn delete_like(&self, comment_id: &str, owner: &str) -> Result<(), DomainError> {
        self.tables
            .write()
            .await
            .likes
            .retain(|l| !(l.comment_id == comment_id && l.owner == owner));
        Ok(())
    }

    async fn find_like(&self, comment_id: &str, owner: &str) -> Result<Option<Like>, DomainError> {
        Ok(self
            .tables
            .read()
            .await
            .likes
            .iter()
            .find(|l| l.comment_id == comment_id && l.owner == owner)
            .cloned())
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u32, DomainError> {
        let count = self
            .tables
            .read()
            .await
            .likes
            .iter()
            .filter(|l| l.comment_id == comment_id)
            .count();
        u32::try_from(count).map_err(DomainError::infrastructure)
    }
}
