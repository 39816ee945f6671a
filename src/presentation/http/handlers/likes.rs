use crate::domain::like::entity::LikeCommentPayload;
use crate::presentation::http::{
    errors::AppError, middleware::user::require_owner, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde_json::{Value, json};

/// Toggles the caller's like on a comment.
pub async fn like_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let owner = require_owner(&headers, &state.config.access_token_key)?;

    let action = state
        .like_comment
        .execute(LikeCommentPayload {
            thread_id: Some(Value::from(thread_id)),
            comment_id: Some(Value::from(comment_id)),
            owner: Some(Value::from(owner)),
        })
        .await?;
    tracing::debug!(?action, "Like toggled");

    Ok(Json(json!({ "status": "success" })))
}
