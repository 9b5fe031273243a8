//! Integration tests for single lookups and story lists

use crate::integration::mock_server::MockServerFixture;
use hnapi::{CancellationToken, Error, ErrorKind, ItemType, StoryList};
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_get_item() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json(
            "/item/8863.json",
            200,
            r#"{"by":"dhouston","descendants":71,"id":8863,"kids":[9224,8917],"score":104,"time":1175714200,"title":"My YC app: Dropbox - Throw away your USB drive","type":"story","url":"http://www.getdropbox.com/u/2/screencast.html"}"#,
        )
        .await;

    let client = fixture.create_test_client();
    let item = assert_ok!(client.get_item(8863, &CancellationToken::new()).await);
    assert_eq!(item.id, 8863);
    assert_eq!(item.kind, ItemType::Story);
    assert_eq!(item.by.as_deref(), Some("dhouston"));
    assert_eq!(item.kids, vec![9224, 8917]);
}

#[tokio::test]
async fn test_get_missing_item_reports_identifier() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_json("/item/999.json", 200, "null").await;

    let client = fixture.create_test_client();
    let err = assert_err!(client.get_item(999, &CancellationToken::new()).await);
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("item 999"), "{err}");
}

#[tokio::test]
async fn test_get_user() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json(
            "/user/jl.json",
            200,
            r#"{"about":"This is a test","created":1173923446,"id":"jl","karma":2937,"submitted":[8265435,8168423]}"#,
        )
        .await;

    let client = fixture.create_test_client();
    let user = assert_ok!(client.get_user("jl", &CancellationToken::new()).await);
    assert_eq!(user.id, "jl");
    assert_eq!(user.karma, 2937);
    assert_eq!(user.submitted, vec![8265435, 8168423]);
}

#[tokio::test]
async fn test_story_lists() {
    let fixture = MockServerFixture::new().await;
    let mut mocks = Vec::new();
    for (i, list) in StoryList::ALL.iter().enumerate() {
        let body = format!("[{}, {}, {}]", i * 10 + 1, i * 10 + 2, i * 10 + 3);
        mocks.push(
            fixture
                .mock_json(&format!("/{}", list.endpoint()), 200, &body)
                .await,
        );
    }

    let client = fixture.create_test_client();
    let cancel = CancellationToken::new();
    for (i, list) in StoryList::ALL.iter().enumerate() {
        let ids = assert_ok!(client.get_story_ids(*list, &cancel).await);
        let base = (i * 10) as u64;
        assert_eq!(ids, vec![base + 1, base + 2, base + 3], "{:?}", list);
    }

    assert_eq!(assert_ok!(client.get_top_stories(&cancel).await), vec![1, 2, 3]);
    assert_eq!(assert_ok!(client.get_new_stories(&cancel).await), vec![11, 12, 13]);
    assert_eq!(assert_ok!(client.get_best_stories(&cancel).await), vec![21, 22, 23]);
    assert_eq!(assert_ok!(client.get_ask_stories(&cancel).await), vec![31, 32, 33]);
    assert_eq!(assert_ok!(client.get_show_stories(&cancel).await), vec![41, 42, 43]);
    assert_eq!(assert_ok!(client.get_job_stories(&cancel).await), vec![51, 52, 53]);
}

#[tokio::test]
async fn test_story_list_server_error() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_error_response("/topstories.json", 503).await;

    let client = fixture.create_test_client();
    let err = assert_err!(client.get_top_stories(&CancellationToken::new()).await);
    assert_eq!(err.kind(), ErrorKind::Status);
    assert!(err.to_string().contains("topstories.json"));
}

#[tokio::test]
async fn test_cancelled_lookup_sends_nothing() {
    let fixture = MockServerFixture::new().await;
    let guard = fixture.mock_no_requests().await;

    let client = fixture.create_test_client();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = assert_err!(client.get_user("pg", &cancel).await);
    assert!(err.is_cancelled());
    assert!(matches!(err, Error::Resource { .. }));
    guard.assert_async().await;
}
