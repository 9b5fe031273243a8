//! Integration tests for the update stream

use crate::integration::mock_server::MockServerFixture;
use futures::StreamExt;
use hnapi::{CancellationToken, UpdateBatch};
use std::time::Duration;

const GRACE: Duration = Duration::from_secs(3);

#[tokio::test]
async fn test_first_update_arrives_without_waiting_an_interval() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json("/updates.json", 200, r#"{"items":[123,456],"profiles":["pg"]}"#)
        .await;

    let client = fixture.builder().poll_interval(Duration::from_secs(3600)).build().unwrap();
    let cancel = CancellationToken::new();
    let mut stream = client.start_updates(cancel.clone()).unwrap();

    let batch = tokio::time::timeout(GRACE, stream.recv())
        .await
        .expect("first poll must be immediate")
        .expect("stream closed unexpectedly");
    assert_eq!(batch, UpdateBatch::new(vec![123, 456], vec!["pg".to_string()]));

    cancel.cancel();
    let end = tokio::time::timeout(GRACE, stream.recv()).await.unwrap();
    assert!(end.is_none());
}

#[tokio::test]
async fn test_failing_feed_keeps_stream_open() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_error_response("/updates.json", 500).await;

    let client = fixture.create_test_client();
    let cancel = CancellationToken::new();
    let mut stream = client
        .start_updates_with_interval(Duration::from_millis(20), cancel.clone())
        .unwrap();

    // Several failed polls: nothing delivered, but the stream is not closed.
    let idle = tokio::time::timeout(Duration::from_millis(200), stream.recv()).await;
    assert!(idle.is_err());
    assert!(!stream.is_finished());

    cancel.cancel();
    let end = tokio::time::timeout(GRACE, stream.next()).await.unwrap();
    assert!(end.is_none());
}

#[tokio::test]
async fn test_empty_feed_delivers_nothing() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json("/updates.json", 200, r#"{"items":[],"profiles":[]}"#)
        .await;

    let client = fixture.create_test_client();
    let cancel = CancellationToken::new();
    let mut stream = client
        .start_updates_with_interval(Duration::from_millis(20), cancel.clone())
        .unwrap();

    let idle = tokio::time::timeout(Duration::from_millis(150), stream.recv()).await;
    assert!(idle.is_err(), "empty batches must not be delivered");
    cancel.cancel();
}

#[tokio::test]
async fn test_streams_are_independent() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json("/updates.json", 200, r#"{"items":[1],"profiles":[]}"#)
        .await;

    let client = fixture.create_test_client();
    let first_cancel = CancellationToken::new();
    let second_cancel = CancellationToken::new();
    let mut first = client
        .start_updates_with_interval(Duration::from_millis(20), first_cancel.clone())
        .unwrap();
    let mut second = client
        .start_updates_with_interval(Duration::from_millis(20), second_cancel.clone())
        .unwrap();

    first_cancel.cancel();
    let drained = tokio::time::timeout(GRACE, async {
        while first.recv().await.is_some() {}
    })
    .await;
    assert!(drained.is_ok(), "cancelled stream must close");

    for _ in 0..2 {
        let batch = tokio::time::timeout(GRACE, second.recv())
            .await
            .unwrap()
            .expect("second stream must keep running");
        assert_eq!(batch.items, vec![1]);
    }
    second_cancel.cancel();
}

#[tokio::test]
async fn test_zero_interval_rejected() {
    let fixture = MockServerFixture::new().await;
    let client = fixture.create_test_client();
    let err = client
        .start_updates_with_interval(Duration::ZERO, CancellationToken::new())
        .err()
        .unwrap();
    assert_eq!(err.kind(), hnapi::ErrorKind::Configuration);
}
