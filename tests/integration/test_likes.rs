use super::helpers::{
    DICODING, JOHN, assert_fail, call, create_comment, create_thread, fetch_thread, request,
    spawn_app, token_for,
};
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn like_toggles_on_and_off() {
    let app = spawn_app().await;
    let dicoding = token_for(DICODING);
    let thread_id = create_thread(&app.app, &dicoding).await;
    let comment_id = create_comment(&app.app, &dicoding, &thread_id, "komentar").await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    let body = call(&app.app, request("PUT", &uri, Some(&dicoding), None), StatusCode::OK).await;
    assert_eq!(body, json!({ "status": "success" }));
    assert_eq!(fetch_thread(&app.app, &thread_id).await["comments"][0]["likeCount"], 1);

    call(&app.app, request("PUT", &uri, Some(&dicoding), None), StatusCode::OK).await;
    assert_eq!(fetch_thread(&app.app, &thread_id).await["comments"][0]["likeCount"], 0);
}

#[tokio::test]
async fn likes_from_different_users_add_up() {
    let app = spawn_app().await;
    let dicoding = token_for(DICODING);
    let john = token_for(JOHN);
    let thread_id = create_thread(&app.app, &dicoding).await;
    let liked = create_comment(&app.app, &dicoding, &thread_id, "disukai").await;
    create_comment(&app.app, &dicoding, &thread_id, "tidak disukai").await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, liked);

    call(&app.app, request("PUT", &uri, Some(&dicoding), None), StatusCode::OK).await;
    call(&app.app, request("PUT", &uri, Some(&john), None), StatusCode::OK).await;

    let thread = fetch_thread(&app.app, &thread_id).await;
    assert_eq!(thread["comments"][0]["likeCount"], 2);
    assert_eq!(thread["comments"][1]["likeCount"], 0);
}

#[tokio::test]
async fn liking_a_deleted_comment_still_counts() {
    let app = spawn_app().await;
    let dicoding = token_for(DICODING);
    let thread_id = create_thread(&app.app, &dicoding).await;
    let comment_id = create_comment(&app.app, &dicoding, &thread_id, "komentar").await;

    call(
        &app.app,
        request(
            "DELETE",
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            Some(&dicoding),
            None,
        ),
        StatusCode::OK,
    )
    .await;
    call(
        &app.app,
        request(
            "PUT",
            &format!("/threads/{}/comments/{}/likes", thread_id, comment_id),
            Some(&dicoding),
            None,
        ),
        StatusCode::OK,
    )
    .await;

    assert_eq!(fetch_thread(&app.app, &thread_id).await["comments"][0]["likeCount"], 1);
}

#[tokio::test]
async fn liking_on_unknown_thread_is_404() {
    let app = spawn_app().await;
    let token = token_for(DICODING);

    let body = call(
        &app.app,
        request(
            "PUT",
            "/threads/thread-unknown/comments/comment-unknown/likes",
            Some(&token),
            None,
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_fail(&body, "thread tidak ditemukan");
}

#[tokio::test]
async fn liking_unknown_comment_is_404() {
    let app = spawn_app().await;
    let token = token_for(DICODING);
    let thread_id = create_thread(&app.app, &token).await;

    let body = call(
        &app.app,
        request(
            "PUT",
            &format!("/threads/{}/comments/comment-unknown/likes", thread_id),
            Some(&token),
            None,
        ),
        StatusCode::NOT_FOUND,
    )
    .await;

    assert_fail(&body, "komentar tidak ditemukan");
}

#[tokio::test]
async fn liking_without_token_is_401() {
    let app = spawn_app().await;
    let token = token_for(DICODING);
    let thread_id = create_thread(&app.app, &token).await;
    let comment_id = create_comment(&app.app, &token, &thread_id, "komentar").await;

    call(
        &app.app,
        request(
            "PUT",
            &format!("/threads/{}/comments/{}/likes", thread_id, comment_id),
            None,
            None,
        ),
        StatusCode::UNAUTHORIZED,
    )
    .await;

    assert_eq!(fetch_thread(&app.app, &thread_id).await["comments"][0]["likeCount"], 0);
}
