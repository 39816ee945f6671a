use super::{
    handlers::{comments, health, likes, replies, threads},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Threads
        .route("/threads", post(threads::add_thread))
        .route("/threads/{thread_id}", get(threads::get_thread))
        // Comments
        .route(
            "/threads/{thread_id}/comments",
            post(comments::add_comment),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(comments::delete_comment),
        )
        // Replies
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(replies::add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(replies::delete_reply),
        )
        // Likes
        .route(
            "/threads/{thread_id}/comments/{comment_id}/likes",
            put(likes::like_comment),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
