//! Integration tests for batch lookups

use crate::integration::mock_server::MockServerFixture;
use hnapi::{CancellationToken, Error, ErrorKind};

#[tokio::test]
async fn test_batch_all_succeed() {
    let fixture = MockServerFixture::new().await;
    let mut mocks = Vec::new();
    for id in 1..=5u64 {
        mocks.push(fixture.mock_story(id, &format!("story {}", id)).await);
    }

    let client = fixture.builder().concurrency(2).build().unwrap();
    let result = client
        .get_items_batch(&[1, 2, 3, 4, 5], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.values.len(), 5);
    assert!(result.first_error.is_none());
    let mut ids: Vec<u64> = result.values.iter().map(|i| i.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_batch_with_partial_failures() {
    let fixture = MockServerFixture::new().await;
    let _a = fixture.mock_story(1, "one").await;
    let _b = fixture.mock_story(2, "two").await;
    let _c = fixture.mock_error_response("/item/3.json", 500).await;
    let _d = fixture.mock_story(4, "four").await;

    let client = fixture.create_test_client();
    let result = client
        .get_items_batch(&[1, 2, 3, 4], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.values.len(), 3);
    assert_eq!(result.failure_count, 1);
    let err = result.first_error.expect("partial batch must report an error");
    assert_eq!(err.kind(), ErrorKind::Status);
    assert!(err.to_string().contains("item 3"), "{err}");
}

#[tokio::test]
async fn test_batch_all_failed() {
    let fixture = MockServerFixture::new().await;
    let _a = fixture.mock_json("/item/1.json", 200, "null").await;
    let _b = fixture.mock_error_response("/item/2.json", 404).await;

    let client = fixture.create_test_client();
    let err = client
        .get_items_batch(&[1, 2], &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::BatchFailed { attempted: 2, .. }));
}

#[tokio::test]
async fn test_batch_empty_input_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let guard = fixture.mock_no_requests().await;

    let client = fixture.create_test_client();
    let result = client
        .get_items_batch(&[], &CancellationToken::new())
        .await
        .unwrap();

    assert!(result.values.is_empty());
    assert!(result.first_error.is_none());
    guard.assert_async().await;
}

#[tokio::test]
async fn test_batch_fetches_duplicates_independently() {
    let fixture = MockServerFixture::new().await;
    let mut server = fixture.server.lock().await;
    let seven = server
        .mock("GET", "/item/7.json")
        .with_status(200)
        .with_body(r#"{"id": 7, "type": "comment", "parent": 1}"#)
        .expect(3)
        .create_async()
        .await;
    drop(server);

    let client = fixture.builder().concurrency(1).build().unwrap();
    let result = client
        .get_items_batch(&[7, 7, 7], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(result.values.len(), 3);
    seven.assert_async().await;
}

#[tokio::test]
async fn test_users_batch() {
    let fixture = MockServerFixture::new().await;
    let _pg = fixture
        .mock_json("/user/pg.json", 200, r#"{"id":"pg","created":1160418092,"karma":155111}"#)
        .await;
    let _jl = fixture
        .mock_json("/user/jl.json", 200, r#"{"id":"jl","created":1173923446,"karma":2937}"#)
        .await;
    let _ghost = fixture.mock_json("/user/ghost.json", 200, "null").await;

    let client = fixture.create_test_client();
    let result = client
        .get_users_batch(&["pg", "jl", "ghost"], &CancellationToken::new())
        .await
        .unwrap();

    let mut names: Vec<&str> = result.values.iter().map(|u| u.id.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["jl", "pg"]);
    let err = result.first_error.unwrap();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("user ghost"));
}
