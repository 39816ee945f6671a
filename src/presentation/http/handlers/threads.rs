use super::{field, json_body};
use crate::domain::thread::entity::AddThreadPayload;
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

pub async fn add_thread(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let owner = require_owner(&headers, &state.config.access_token_key)?;
    let body = json_body(&headers, &body)?;

    let added_thread = state
        .add_thread
        .execute(AddThreadPayload {
            title: field(&body, "title"),
            body: field(&body, "body"),
            owner: Some(Value::from(owner)),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "success", "data": { "addedThread": added_thread } })),
    ))
}

pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let thread = state.get_thread.execute(&thread_id).await?;
    Ok(Json(json!({ "status": "success", "data": { "thread": thread } })))
}
