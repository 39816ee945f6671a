use super::helpers::{
    DICODING, assert_fail, call, create_comment, create_reply, create_thread, fetch_thread,
    request, spawn_app, token_for,
};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn replying_through_another_thread_is_404() {
    let app = spawn_app().await;
    let token = token_for(DICODING);
    let thread_a = create_thread(&app.app, &token).await;
    let thread_b = create_thread(&app.app, &token).await;
    let comment_b = create_comment(&app.app, &token, &thread_b, "di thread b").await;

    let body = call(
        &app.app,
        request(
            "POST",
            &format!("/threads/{}/comments/{}/replies", thread_a, comment_b),
            Some(&token),
            Some(json!({ "content": "salah alamat" })),
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_fail(&body, "komentar tidak ditemukan");
    let thread = fetch_thread(&app.app, &thread_b).await;
    assert!(thread["comments"][0]["replies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_comment_through_another_thread_is_404() {
    let app = spawn_app().await;
    let token = token_for(DICODING);
    let thread_a = create_thread(&app.app, &token).await;
    let thread_b = create_thread(&app.app, &token).await;
    let comment_b = create_comment(&app.app, &token, &thread_b, "di thread b").await;

    let body = call(
        &app.app,
        request(
            "DELETE",
            &format!("/threads/{}/comments/{}", thread_a, comment_b),
            Some(&token),
            None,
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_fail(&body, "komentar tidak ditemukan");
    assert_eq!(app.store.comment_is_deleted(&comment_b).await, Some(false));
}

#[tokio::test]
async fn deleting_a_reply_through_another_comment_is_404() {
    let app = spawn_app().await;
    let token = token_for(DICODING);
    let thread_id = create_thread(&app.app, &token).await;
    let comment_id = create_comment(&app.app, &token, &thread_id, "pertama").await;
    let other_comment = create_comment(&app.app, &token, &thread_id, "kedua").await;
    let reply_id = create_reply(&app.app, &token, &thread_id, &comment_id, "balasan").await;

    let body = call(
        &app.app,
        request(
            "DELETE",
            &format!(
                "/threads/{}/comments/{}/replies/{}",
                thread_id, other_comment, reply_id
            ),
            Some(&token),
            None,
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_fail(&body, "balasan tidak ditemukan");
    assert_eq!(app.store.reply_is_deleted(&reply_id).await, Some(false));
}

#[tokio::test]
async fn liking_a_comment_through_another_thread_is_404() {
    let app = spawn_app().await;
    let token = token_for(DICODING);
    let thread_a = create_thread(&app.app, &token).await;
    let thread_b = create_thread(&app.app, &token).await;
    let comment_b = create_comment(&app.app, &token, &thread_b, "di thread b").await;

    let body = call(
        &app.app,
        request(
            "PUT",
            &format!("/threads/{}/comments/{}/likes", thread_a, comment_b),
            Some(&token),
            None,
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_fail(&body, "komentar tidak ditemukan");
    let thread = fetch_thread(&app.app, &thread_b).await;
    assert_eq!(thread["comments"][0]["likeCount"], 0);
}
