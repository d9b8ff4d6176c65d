//! Integration Tests: Post, Marker and Comment stores
//!
//! Coverage:
//! - create then list returns the submitted fields with an assigned id
//! - list ordering by creation time
//! - edit replaces the mutable fields, keeps id and date_posted
//! - delete removes the record; later lookups are NotFound
//! - comments are listed per marker and report their marker on delete
//! - deleting a marker leaves its comments listed under its id

mod common;

use common::{comment_input, marker_input, post_input, test_state};
use geoblog_service::AppError;

#[tokio::test]
async fn created_post_appears_in_list() {
    let state = test_state().await;

    let post = state
        .posts
        .create(&post_input("Hello", "First post", "alice"))
        .await
        .unwrap();

    let posts = state.posts.list().await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, post.id);
    assert_eq!(posts[0].title, "Hello");
    assert_eq!(posts[0].content, "First post");
    assert_eq!(posts[0].author, "alice");
}

#[tokio::test]
async fn empty_strings_are_accepted() {
    let state = test_state().await;

    let post = state.posts.create(&post_input("", "", "")).await.unwrap();
    assert_eq!(post.title, "");
    assert_eq!(state.posts.get(post.id).await.unwrap().author, "");
}

#[tokio::test]
async fn posts_are_listed_oldest_first() {
    let state = test_state().await;

    let first = state.posts.create(&post_input("one", "", "a")).await.unwrap();
    let second = state.posts.create(&post_input("two", "", "a")).await.unwrap();
    let third = state.posts.create(&post_input("three", "", "a")).await.unwrap();

    assert!(first.id < second.id && second.id < third.id);

    let ids: Vec<i64> = state.posts.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn post_update_keeps_id_and_timestamp() {
    let state = test_state().await;

    let post = state
        .posts
        .create(&post_input("Draft", "tbd", "alice"))
        .await
        .unwrap();

    let updated = state
        .posts
        .update(post.id, &post_input("Final", "done", "bob"))
        .await
        .unwrap();

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.date_posted, post.date_posted);
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "done");
    assert_eq!(updated.author, "bob");
}

#[tokio::test]
async fn post_operations_on_missing_id_are_not_found() {
    let state = test_state().await;

    assert!(matches!(state.posts.get(42).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        state.posts.update(42, &post_input("x", "y", "z")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(state.posts.delete(42).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn deleted_post_is_gone() {
    let state = test_state().await;

    let post = state.posts.create(&post_input("Bye", "", "a")).await.unwrap();
    state.posts.delete(post.id).await.unwrap();

    assert!(matches!(state.posts.get(post.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(state.posts.delete(post.id).await, Err(AppError::NotFound(_))));
    assert!(state.posts.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let state = test_state().await;

    let first = state.posts.create(&post_input("a", "", "a")).await.unwrap();
    state.posts.delete(first.id).await.unwrap();
    let second = state.posts.create(&post_input("b", "", "a")).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn marker_round_trip_with_coordinates() {
    let state = test_state().await;

    let marker = state
        .markers
        .create(&marker_input("Cafe", 40.0, -73.0))
        .await
        .unwrap();

    let markers = state.markers.list().await.unwrap();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].id, marker.id);
    assert_eq!(markers[0].title, "Cafe");
    assert_eq!(markers[0].latitude, 40.0);
    assert_eq!(markers[0].longitude, -73.0);
}

#[tokio::test]
async fn marker_coordinates_are_not_range_checked() {
    let state = test_state().await;

    let marker = state
        .markers
        .create(&marker_input("Nowhere", 123.0, -540.5))
        .await
        .unwrap();

    assert_eq!(marker.latitude, 123.0);
    assert_eq!(marker.longitude, -540.5);
}

#[tokio::test]
async fn marker_update_replaces_every_field() {
    let state = test_state().await;

    let marker = state
        .markers
        .create(&marker_input("Cafe", 40.0, -73.0))
        .await
        .unwrap();

    let mut input = marker_input("Bakery", 41.5, -72.25);
    input.author = "carol".to_string();
    let updated = state.markers.update(marker.id, &input).await.unwrap();

    assert_eq!(updated.id, marker.id);
    assert_eq!(updated.date_posted, marker.date_posted);
    assert_eq!(updated.title, "Bakery");
    assert_eq!(updated.author, "carol");
    assert_eq!(updated.latitude, 41.5);
    assert_eq!(updated.longitude, -72.25);
}

#[tokio::test]
async fn comment_attached_to_marker() {
    let state = test_state().await;

    let marker = state
        .markers
        .create(&marker_input("Cafe", 40.0, -73.0))
        .await
        .unwrap();
    state
        .comments
        .create(marker.id, &comment_input("hi", "dave"))
        .await
        .unwrap();

    let comments = state.comments.list_by_parent(marker.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "hi");
    assert_eq!(comments[0].author, "dave");
    assert_eq!(comments[0].parent_id, marker.id);
}

#[tokio::test]
async fn comments_are_scoped_to_their_marker() {
    let state = test_state().await;

    let cafe = state.markers.create(&marker_input("Cafe", 1.0, 1.0)).await.unwrap();
    let park = state.markers.create(&marker_input("Park", 2.0, 2.0)).await.unwrap();

    let c1 = state.comments.create(cafe.id, &comment_input("one", "a")).await.unwrap();
    state.comments.create(park.id, &comment_input("other", "a")).await.unwrap();
    let c2 = state.comments.create(cafe.id, &comment_input("two", "a")).await.unwrap();

    let ids: Vec<i64> = state
        .comments
        .list_by_parent(cafe.id)
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![c1.id, c2.id]);
}

#[tokio::test]
async fn comment_on_missing_marker_is_accepted() {
    let state = test_state().await;

    let comment = state
        .comments
        .create(999, &comment_input("orphan", "a"))
        .await
        .unwrap();

    assert_eq!(comment.parent_id, 999);
    assert_eq!(state.comments.list_by_parent(999).await.unwrap().len(), 1);
}

#[tokio::test]
async fn comment_update_and_delete() {
    let state = test_state().await;

    let marker = state.markers.create(&marker_input("Cafe", 1.0, 1.0)).await.unwrap();
    let comment = state
        .comments
        .create(marker.id, &comment_input("hi", "dave"))
        .await
        .unwrap();

    let updated = state
        .comments
        .update(comment.id, &comment_input("hello", "erin"))
        .await
        .unwrap();
    assert_eq!(updated.id, comment.id);
    assert_eq!(updated.parent_id, marker.id);
    assert_eq!(updated.content, "hello");
    assert_eq!(updated.author, "erin");
    assert_eq!(updated.date_posted, comment.date_posted);

    let parent_id = state.comments.delete(comment.id).await.unwrap();
    assert_eq!(parent_id, marker.id);
    assert!(matches!(
        state.comments.get(comment.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.comments.delete(comment.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn deleting_marker_keeps_its_comments() {
    let state = test_state().await;

    let cafe = state.markers.create(&marker_input("Cafe", 1.0, 1.0)).await.unwrap();
    state.comments.create(cafe.id, &comment_input("a", "x")).await.unwrap();
    state.comments.create(cafe.id, &comment_input("b", "x")).await.unwrap();

    state.markers.delete(cafe.id).await.unwrap();

    assert!(matches!(state.markers.get(cafe.id).await, Err(AppError::NotFound(_))));
    let orphans = state.comments.list_by_parent(cafe.id).await.unwrap();
    assert_eq!(orphans.len(), 2);
    assert!(orphans.iter().all(|c| c.parent_id == cafe.id));
}

#[tokio::test]
async fn deleting_missing_marker_keeps_orphan_comments() {
    let state = test_state().await;

    state.comments.create(77, &comment_input("orphan", "x")).await.unwrap();

    assert!(matches!(state.markers.delete(77).await, Err(AppError::NotFound(_))));
    assert_eq!(state.comments.list_by_parent(77).await.unwrap().len(), 1);
}
