use forum_api::{
    application::{
        get_thread::use_case::GetThreadUseCase,
        like_comment::{dto::LikeAction, use_case::LikeCommentUseCase},
    },
    domain::{
        comment::{
            entity::{AddComment, AddCommentPayload, DELETED_COMMENT_CONTENT},
            repository::CommentRepository,
        },
        like::{entity::LikeCommentPayload, entity::NewLike, repository::LikeRepository},
        reply::{
            entity::{AddReply, AddReplyPayload, DELETED_REPLY_CONTENT},
            repository::ReplyRepository,
        },
        shared::{
            errors::{DomainError, LIKE_ALREADY_EXISTS},
            id_generator::IdGenerator,
        },
        thread::{
            entity::{AddThread, AddThreadPayload},
            repository::ThreadRepository,
        },
    },
    infrastructure::repositories::MemoryForumStore,
};
use serde_json::json;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

#[derive(Default)]
struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn generate(&self) -> String {
        (self.0.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }
}

fn store() -> Arc<MemoryForumStore> {
    Arc::new(MemoryForumStore::new(Arc::new(SequentialIds::default())))
}

async fn seed_thread(store: &MemoryForumStore, owner: &str) -> String {
    store
        .add_thread(
            AddThread::new(AddThreadPayload {
                title: Some(json!("sebuah thread")),
                body: Some(json!("sebuah body thread")),
                owner: Some(json!(owner)),
            })
            .unwrap(),
        )
        .await
        .unwrap()
        .id
}

async fn seed_comment(store: &MemoryForumStore, thread_id: &str, owner: &str, content: &str) -> String {
    store
        .add_comment(
            AddComment::new(AddCommentPayload {
                content: Some(json!(content)),
                thread_id: Some(json!(thread_id)),
                owner: Some(json!(owner)),
            })
            .unwrap(),
        )
        .await
        .unwrap()
        .id
}

async fn seed_reply(
    store: &MemoryForumStore,
    thread_id: &str,
    comment_id: &str,
    owner: &str,
    content: &str,
) -> String {
    store
        .add_reply(
            AddReply::new(AddReplyPayload {
                content: Some(json!(content)),
                comment_id: Some(json!(comment_id)),
                thread_id: Some(json!(thread_id)),
                owner: Some(json!(owner)),
            })
            .unwrap(),
        )
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn ids_carry_entity_prefix() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    let reply_id = seed_reply(&store, &thread_id, &comment_id, "user-1", "b").await;

    assert_eq!(thread_id, "thread-1");
    assert_eq!(comment_id, "comment-2");
    assert_eq!(reply_id, "reply-3");
}

#[tokio::test]
async fn thread_lookup_uses_registered_username_or_owner() {
    let store = store();
    store.register_user("user-1", "dicoding").await;
    let named = seed_thread(&store, "user-1").await;
    let anonymous = seed_thread(&store, "user-2").await;

    assert_eq!(store.get_thread_by_id(&named).await.unwrap().username, "dicoding");
    assert_eq!(store.get_thread_by_id(&anonymous).await.unwrap().username, "user-2");
    assert_eq!(
        store.get_thread_by_id("thread-missing").await.unwrap_err(),
        DomainError::not_found("THREAD_NOT_FOUND")
    );
}

#[tokio::test]
async fn comments_keep_creation_order_and_redact_deleted_content() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let first = seed_comment(&store, &thread_id, "user-1", "pertama").await;
    let second = seed_comment(&store, &thread_id, "user-2", "kedua").await;
    let other_thread = seed_thread(&store, "user-1").await;
    seed_comment(&store, &other_thread, "user-1", "lain").await;

    store.delete_comment(&first).await.unwrap();

    let comments = store.get_comments_by_thread_id(&thread_id).await.unwrap();
    let ids: Vec<_> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, [first.as_str(), second.as_str()]);
    assert_eq!(comments[0].content, DELETED_COMMENT_CONTENT);
    assert_eq!(comments[1].content, "kedua");
    assert_eq!(store.comment_is_deleted(&first).await, Some(true));
}

#[tokio::test]
async fn deleting_twice_is_idempotent() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    let reply_id = seed_reply(&store, &thread_id, &comment_id, "user-1", "b").await;

    store.delete_reply(&reply_id).await.unwrap();
    store.delete_reply(&reply_id).await.unwrap();
    store.delete_comment(&comment_id).await.unwrap();
    store.delete_comment(&comment_id).await.unwrap();

    assert_eq!(store.reply_is_deleted(&reply_id).await, Some(true));
    assert_eq!(store.comment_is_deleted(&comment_id).await, Some(true));
}

#[tokio::test]
async fn replies_are_scoped_to_their_comment_and_redacted() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    let other_comment = seed_comment(&store, &thread_id, "user-1", "b").await;
    let kept = seed_reply(&store, &thread_id, &comment_id, "user-2", "tetap").await;
    let removed = seed_reply(&store, &thread_id, &comment_id, "user-2", "hapus").await;
    seed_reply(&store, &thread_id, &other_comment, "user-2", "lain").await;

    store.delete_reply(&removed).await.unwrap();

    let replies = store.get_replies_by_comment_id(&comment_id).await.unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].id, kept);
    assert_eq!(replies[0].content, "tetap");
    assert_eq!(replies[1].id, removed);
    assert_eq!(replies[1].content, DELETED_REPLY_CONTENT);
}

#[tokio::test]
async fn ownership_checks_distinguish_missing_from_foreign() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    let reply_id = seed_reply(&store, &thread_id, &comment_id, "user-1", "b").await;

    assert!(
        store
            .verify_comment_owner(&comment_id, &thread_id, "user-1")
            .await
            .is_ok()
    );
    assert_eq!(
        store.verify_comment_owner(&comment_id, &thread_id, "user-2").await,
        Err(DomainError::not_owner())
    );
    assert_eq!(
        store.verify_comment_owner("comment-x", &thread_id, "user-1").await,
        Err(DomainError::not_found("COMMENT_NOT_FOUND"))
    );

    assert!(
        store
            .verify_reply_owner(&reply_id, &comment_id, "user-1")
            .await
            .is_ok()
    );
    assert_eq!(
        store.verify_reply_owner(&reply_id, &comment_id, "user-2").await,
        Err(DomainError::not_owner())
    );
    assert_eq!(
        store.verify_reply_exist("reply-x", &comment_id).await,
        Err(DomainError::not_found("REPLY_NOT_FOUND"))
    );
}

#[tokio::test]
async fn lookups_are_scoped_to_the_parent() {
    let store = store();
    let thread_a = seed_thread(&store, "user-1").await;
    let thread_b = seed_thread(&store, "user-1").await;
    let comment_b = seed_comment(&store, &thread_b, "user-1", "di b").await;
    let other_comment_b = seed_comment(&store, &thread_b, "user-1", "juga di b").await;
    let reply_id = seed_reply(&store, &thread_b, &comment_b, "user-1", "balasan").await;

    assert!(store.verify_comment_exist(&comment_b, &thread_b).await.is_ok());
    assert_eq!(
        store.verify_comment_exist(&comment_b, &thread_a).await,
        Err(DomainError::not_found("COMMENT_NOT_FOUND"))
    );
    // Owner of the row, wrong thread: still not found, never forbidden.
    assert_eq!(
        store.verify_comment_owner(&comment_b, &thread_a, "user-1").await,
        Err(DomainError::not_found("COMMENT_NOT_FOUND"))
    );

    assert!(store.verify_reply_exist(&reply_id, &comment_b).await.is_ok());
    assert_eq!(
        store.verify_reply_exist(&reply_id, &other_comment_b).await,
        Err(DomainError::not_found("REPLY_NOT_FOUND"))
    );
    assert_eq!(
        store
            .verify_reply_owner(&reply_id, &other_comment_b, "user-1")
            .await,
        Err(DomainError::not_found("REPLY_NOT_FOUND"))
    );
}

#[tokio::test]
async fn reply_must_share_its_comment_thread() {
    let store = store();
    let thread_a = seed_thread(&store, "user-1").await;
    let thread_b = seed_thread(&store, "user-1").await;
    let comment_b = seed_comment(&store, &thread_b, "user-1", "di b").await;

    let err = store
        .add_reply(
            AddReply::new(AddReplyPayload {
                content: Some(json!("salah thread")),
                comment_id: Some(json!(comment_b)),
                thread_id: Some(json!(thread_a)),
                owner: Some(json!("user-1")),
            })
            .unwrap(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InfrastructureError(_)));
    assert!(store.get_replies_by_comment_id(&comment_b).await.unwrap().is_empty());
}

#[tokio::test]
async fn deleted_comment_still_exists_for_verification() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    store.delete_comment(&comment_id).await.unwrap();

    assert!(store.verify_comment_exist(&comment_id, &thread_id).await.is_ok());
}

#[tokio::test]
async fn comment_for_unknown_thread_is_rejected_by_storage() {
    let store = store();
    let err = store
        .add_comment(
            AddComment::new(AddCommentPayload {
                content: Some(json!("a")),
                thread_id: Some(json!("thread-x")),
                owner: Some(json!("user-1")),
            })
            .unwrap(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::InfrastructureError(_)));
}

#[tokio::test]
async fn duplicate_like_conflicts() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    let like = NewLike {
        comment_id: comment_id.clone(),
        owner: "user-2".into(),
    };

    store.add_like(like.clone()).await.unwrap();
    assert_eq!(
        store.add_like(like).await.unwrap_err(),
        DomainError::Conflict(LIKE_ALREADY_EXISTS.to_string())
    );
    assert_eq!(store.get_like_count_by_comment_id(&comment_id).await.unwrap(), 1);
}

#[tokio::test]
async fn deleting_an_absent_like_is_a_no_op() {
    let store = store();
    assert!(store.delete_like("comment-x", "user-1").await.is_ok());
    assert_eq!(store.find_like("comment-x", "user-1").await.unwrap(), None);
}

#[tokio::test]
async fn like_toggle_round_trips_through_the_store() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;
    let use_case = LikeCommentUseCase::new(store.clone(), store.clone(), store.clone());
    let payload = || LikeCommentPayload {
        thread_id: Some(json!(thread_id)),
        comment_id: Some(json!(comment_id)),
        owner: Some(json!("user-2")),
    };

    assert_eq!(use_case.execute(payload()).await.unwrap(), LikeAction::Liked);
    assert_eq!(store.get_like_count_by_comment_id(&comment_id).await.unwrap(), 1);

    assert_eq!(use_case.execute(payload()).await.unwrap(), LikeAction::Unliked);
    assert_eq!(store.get_like_count_by_comment_id(&comment_id).await.unwrap(), 0);
    assert_eq!(store.find_like(&comment_id, "user-2").await.unwrap(), None);
}

#[tokio::test]
async fn concurrent_toggles_never_duplicate_a_like() {
    let store = store();
    let thread_id = seed_thread(&store, "user-1").await;
    let comment_id = seed_comment(&store, &thread_id, "user-1", "a").await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = store.clone();
            let like = NewLike {
                comment_id: comment_id.clone(),
                owner: "user-2".into(),
            };
            tokio::spawn(async move { store.add_like(like).await })
        })
        .collect();

    let mut inserted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => inserted += 1,
            Err(err) => assert_eq!(err, DomainError::Conflict(LIKE_ALREADY_EXISTS.to_string())),
        }
    }

    assert_eq!(inserted, 1);
    assert_eq!(store.get_like_count_by_comment_id(&comment_id).await.unwrap(), 1);
}

#[tokio::test]
async fn thread_detail_assembles_comments_replies_and_like_counts() {
    let store = store();
    store.register_user("user-1", "dicoding").await;
    store.register_user("user-2", "johndoe").await;
    let thread_id = seed_thread(&store, "user-1").await;
    let first = seed_comment(&store, &thread_id, "user-2", "pertama").await;
    let second = seed_comment(&store, &thread_id, "user-1", "kedua").await;
    seed_reply(&store, &thread_id, &first, "user-1", "balasan").await;
    store
        .add_like(NewLike {
            comment_id: second.clone(),
            owner: "user-2".into(),
        })
        .await
        .unwrap();
    store.delete_comment(&first).await.unwrap();

    let use_case = GetThreadUseCase::new(store.clone(), store.clone(), store.clone(), store.clone());
    let detail = use_case.execute(&thread_id).await.unwrap();

    assert_eq!(detail.username, "dicoding");
    assert_eq!(detail.comments.len(), 2);
    assert_eq!(detail.comments[0].id, first);
    assert_eq!(detail.comments[0].username, "johndoe");
    assert_eq!(detail.comments[0].content, DELETED_COMMENT_CONTENT);
    assert_eq!(detail.comments[0].replies.len(), 1);
    assert_eq!(detail.comments[0].replies[0].content, "balasan");
    assert_eq!(detail.comments[0].like_count, 0);
    assert_eq!(detail.comments[1].id, second);
    assert!(detail.comments[1].replies.is_empty());
    assert_eq!(detail.comments[1].like_count, 1);
}
