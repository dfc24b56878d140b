#![cfg(feature = "walrus")]

use {
    anyhow::Result,
    assert_matches::assert_matches,
    blobmint_sdk::walrus::{UploadResponse, WalrusClient, WalrusError},
    mockito::{Matcher, Server, ServerGuard},
    serde::{Deserialize, Serialize},
    serde_json::json,
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SampleData {
    name: String,
    value: i32,
}

/// Setup mock server for Walrus testing
async fn setup_mock_server() -> Result<(ServerGuard, WalrusClient)> {
    let server = Server::new_async().await;
    let server_url = server.url();

    let walrus_client = WalrusClient::builder()
        .with_client(reqwest::Client::new())
        .with_publisher_url(&server_url)
        .with_aggregator_url(&server_url)
        .build();

    Ok((server, walrus_client))
}

fn newly_created_body(blob_id: &str) -> String {
    json!({
        "newlyCreated": {
            "blobObject": {
                "id": "0xobject",
                "storedEpoch": 1,
                "blobId": blob_id,
                "size": 13,
                "erasureCodeType": "RedStuff",
                "certifiedEpoch": 1,
                "storage": {
                    "id": "0xstorage",
                    "startEpoch": 1,
                    "endEpoch": 2,
                    "storageSize": 1000
                }
            },
            "encodedSize": 1000,
            "cost": 50
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_store_text_newly_created() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let content = r#"{"hello":"walrus"}"#;

    let mock = server
        .mock("PUT", "/v1/store")
        .match_header("content-type", "application/json")
        .match_body(content)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(newly_created_body("text_blob_id"))
        .create_async()
        .await;

    let response = client.store_text(content.to_string()).await?;

    let created = response.newly_created().expect("Expected a new blob");
    assert_eq!(created.blob_object.blob_id, "text_blob_id");
    assert_eq!(created.blob_object.storage.end_epoch, 2);
    assert_eq!(created.cost, 50);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_store_text_already_certified() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let mock = server
        .mock("PUT", "/v1/store")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "alreadyCertified": {
                    "blobId": "certified_blob_id",
                    "eventOrObject": { "Event": { "txDigest": "digest", "eventSeq": "0" } },
                    "endEpoch": 40
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client.store_text("{}".to_string()).await?;

    assert_matches!(&response, UploadResponse::AlreadyCertified(certified) if certified.blob_id == "certified_blob_id");
    assert_eq!(response.end_epoch(), 40);

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_store_json_with_query_params() -> Result<()> {
    let (mut server, _) = setup_mock_server().await?;

    let client = WalrusClient::builder()
        .with_publisher_url(&server.url())
        .with_epochs(Some(3))
        .with_send_object_to(Some("0xabc".to_string()))
        .build();

    let data = SampleData {
        name: "Test".to_string(),
        value: 10,
    };

    let mock = server
        .mock("PUT", "/v1/store")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("epochs".into(), "3".into()),
            Matcher::UrlEncoded("send_object_to".into(), "0xabc".into()),
        ]))
        .match_body(Matcher::Json(json!({ "name": "Test", "value": 10 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(newly_created_body("json_blob_id"))
        .create_async()
        .await;

    let response = client.store_json(&data).await?;

    assert_eq!(response.blob_id(), "json_blob_id");

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_store_api_error() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let mock = server
        .mock("PUT", "/v1/store")
        .with_status(500)
        .with_body("publisher is down")
        .create_async()
        .await;

    let err = client.store_text("{}".to_string()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_matches!(
        err,
        WalrusError::ApiError { status_code: 500, ref message } if message == "publisher is down"
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_store_malformed_response() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let mock = server
        .mock("PUT", "/v1/store")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"somethingElse":{}}"#)
        .create_async()
        .await;

    let err = client.store_text("{}".to_string()).await.unwrap_err();

    assert_matches!(err, WalrusError::HttpError(_));

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_read_json() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let mock = server
        .mock("GET", "/v1/json_blob_id")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"Test","value":42}"#)
        .create_async()
        .await;

    let data: SampleData = client.read_json("json_blob_id").await?;

    assert_eq!(
        data,
        SampleData {
            name: "Test".to_string(),
            value: 42
        }
    );

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_read_json_not_found() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let mock = server
        .mock("GET", "/v1/missing")
        .with_status(404)
        .with_body("blob not found")
        .create_async()
        .await;

    let result = client.read_json::<SampleData>("missing").await;

    assert_matches!(result, Err(WalrusError::ApiError { status_code: 404, .. }));

    mock.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_verify_blob() -> Result<()> {
    let (mut server, client) = setup_mock_server().await?;

    let existing = server
        .mock("HEAD", "/v1/existing")
        .with_status(200)
        .create_async()
        .await;

    let missing = server
        .mock("HEAD", "/v1/missing")
        .with_status(404)
        .create_async()
        .await;

    assert!(client.verify_blob("existing").await?);
    assert!(!client.verify_blob("missing").await?);

    existing.assert_async().await;
    missing.assert_async().await;

    Ok(())
}

#[tokio::test]
async fn test_blob_url_uses_aggregator() -> Result<()> {
    let (server, client) = setup_mock_server().await?;

    assert_eq!(client.blob_url("abc"), format!("{}/v1/abc", server.url()));
    assert_eq!(client.publisher_url(), server.url());

    Ok(())
}
