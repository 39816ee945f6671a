use super::{field, json_body};
use crate::domain::reply::entity::{AddReplyPayload, DeleteReplyPayload};
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

pub async fn add_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let owner = require_owner(&headers, &state.config.access_token_key)?;
    let body = json_body(&headers, &body)?;

    let added_reply = state
        .add_reply
        .execute(AddReplyPayload {
            content: field(&body, "content"),
            comment_id: Some(Value::from(comment_id)),
            thread_id: Some(Value::from(thread_id)),
            owner: Some(Value::from(owner)),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedReply": added_reply } })),
    ))
}

pub async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let owner = require_owner(&headers, &state.config.access_token_key)?;

    state
        .delete_reply
        .execute(DeleteReplyPayload {
            thread_id: Some(Value::from(thread_id)),
            comment_id: Some(Value::from(comment_id)),
            reply_id: Some(Value::from(reply_id)),
            owner: Some(Value::from(owner)),
        })
        .await?;

    Ok(Json(json!({ "status": "success" })))
}
