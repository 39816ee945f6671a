//! Storage backends for the forum repositories.
//!
//! The `sqlx_*` repositories talk to PostgreSQL; [`MemoryForumStore`]
//! implements the same contracts in-process for local runs and tests.

pub mod memory_forum_store;
pub mod sqlx_comment_repository;
pub mod sqlx_like_repository;
pub mod sqlx_reply_repository;
pub mod sqlx_thread_repository;

pub use memory_forum_store::MemoryForumStore;
pub use sqlx_comment_repository::SqlxCommentRepository;
pub use sqlx_like_repository::SqlxLikeRepository;
pub use sqlx_reply_repository::SqlxReplyRepository;
pub use sqlx_thread_repository::SqlxThreadRepository;
