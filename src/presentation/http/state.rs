use crate::{
    application::{
        add_comment::use_case::AddCommentUseCase, add_reply::use_case::AddReplyUseCase,
        add_thread::use_case::AddThreadUseCase, delete_comment::use_case::DeleteCommentUseCase,
        delete_reply::use_case::DeleteReplyUseCase, get_thread::use_case::GetThreadUseCase,
        like_comment::use_case::LikeCommentUseCase,
    },
    config::Config,
    domain::{
        comment::repository::CommentRepository, like::repository::LikeRepository,
        reply::repository::ReplyRepository, shared::id_generator::IdGenerator,
        thread::repository::ThreadRepository,
    },
    infrastructure::repositories::{
        MemoryForumStore, SqlxCommentRepository, SqlxLikeRepository, SqlxReplyRepository,
        SqlxThreadRepository,
    },
};
use sqlx::PgPool;
use std::sync::Arc;

/// The four repository collaborators, backed by one storage implementation.
#[derive(Clone)]
pub struct Repositories {
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn ReplyRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            threads: Arc::new(SqlxThreadRepository::new(pool.clone(), id_generator.clone())),
            comments: Arc::new(SqlxCommentRepository::new(pool.clone(), id_generator.clone())),
            replies: Arc::new(SqlxReplyRepository::new(pool.clone(), id_generator.clone())),
            likes: Arc::new(SqlxLikeRepository::new(pool, id_generator)),
        }
    }

    pub fn memory(store: Arc<MemoryForumStore>) -> Self {
        Self {
            threads: store.clone(),
            comments: store.clone(),
            replies: store.clone(),
            likes: store,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub add_thread: Arc<AddThreadUseCase>,
    pub get_thread: Arc<GetThreadUseCase>,
    pub add_comment: Arc<AddCommentUseCase>,
    pub delete_comment: Arc<DeleteCommentUseCase>,
    pub add_reply: Arc<AddReplyUseCase>,
    pub delete_reply: Arc<DeleteReplyUseCase>,
    pub like_comment: Arc<LikeCommentUseCase>,
}

impl AppState {
    pub fn new(config: Config, repos: Repositories) -> Self {
        let Repositories {
            threads,
            comments,
            replies,
            likes,
        } = repos;

        Self {
            config,
            add_thread: Arc::new(AddThreadUseCase::new(threads.clone())),
            get_thread: Arc::new(GetThreadUseCase::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
                likes.clone(),
            )),
            add_comment: Arc::new(AddCommentUseCase::new(threads.clone(), comments.clone())),
            delete_comment: Arc::new(DeleteCommentUseCase::new(
                threads.clone(),
                comments.clone(),
            )),
            add_reply: Arc::new(AddReplyUseCase::new(
                threads.clone(),
                comments.clone(),
                replies.clone(),
            )),
            delete_reply: Arc::new(DeleteReplyUseCase::new(
                threads.clone(),
                comments.clone(),
                replies,
            )),
            like_comment: Arc::new(LikeCommentUseCase::new(threads, comments, likes)),
        }
    }
}
