use super::{field, json_body};
use crate::domain::comment::entity::{AddCommentPayload, DeleteCommentPayload};
use crate::presentation::http::{
    errors::AppError, middleware::user::require_owner, state::AppState,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::{Value, json};

pub async fn add_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let owner = require_owner(&headers, &state.config.access_token_key)?;
    let body = json_body(&headers, &body)?;

    let added_comment = state
        .add_comment
        .execute(AddCommentPayload {
            content: field(&body, "content"),
            thread_id: Some(Value::from(thread_id)),
            owner: Some(Value::from(owner)),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedComment": added_comment } })),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let owner = require_owner(&headers, &state.config.access_token_key)?;

    state
        .delete_comment
        .execute(DeleteCommentPayload {
            thread_id: Some(Value::from(thread_id)),
            comment_id: Some(Value::from(comment_id)),
            owner: Some(Value::from(owner)),
        })
        .await?;

    Ok(Json(json!({ "status": "success" })))
}
