//! Integration tests for the types client.
//!
//! These tests use wiremock to mock the Stencil API and verify pagination,
//! authentication headers, and error surfacing.

use std::time::Duration;

use stencil_client::{ClientError, TypesClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn types_page(codenames: &[&str], next_page: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "types": codenames
            .iter()
            .map(|c| serde_json::json!({ "codename": c, "elements": [] }))
            .collect::<Vec<_>>(),
        "pagination": { "next_page": next_page }
    })
}

/// A single page with no next_page link ends the walk.
#[tokio::test]
async fn test_single_page_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_page(&["article"], None)))
        .mount(&mock_server)
        .await;

    let client = TypesClient::builder("env-1")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let types = client.content_types().await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].codename, "article");
}

/// A non-empty next_page link triggers a second request with advanced skip.
#[tokio::test]
async fn test_pagination_follows_next_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_page(
            &["article", "office"],
            Some("https://example.com/env-1/types?skip=2&limit=2"),
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .and(query_param("skip", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_page(&["coffee"], None)))
        .mount(&mock_server)
        .await;

    let client = TypesClient::builder("env-1")
        .base_url(mock_server.uri())
        .page_size(2)
        .page_delay(Duration::from_millis(1))
        .build()
        .unwrap();

    let types = client.content_types().await.unwrap();
    let codenames: Vec<_> = types.iter().map(|t| t.codename.as_str()).collect();
    assert_eq!(codenames, vec!["article", "office", "coffee"]);
}

/// An empty-string next_page is treated the same as a missing one.
#[tokio::test]
async fn test_empty_next_page_ends_walk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_page(&["article"], Some(""))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TypesClient::builder("env-1")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let types = client.content_types().await.unwrap();
    assert_eq!(types.len(), 1);
}

/// The API key is sent as a bearer token.
#[tokio::test]
async fn test_api_key_sent_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .and(header("authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(types_page(&[], None)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TypesClient::builder("env-1")
        .base_url(mock_server.uri())
        .api_key("sk-test")
        .build()
        .unwrap();

    assert!(client.content_types().await.is_ok());
}

/// Non-success statuses surface as HttpStatus with the body as message.
#[tokio::test]
async fn test_http_error_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let client = TypesClient::builder("env-1")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let err = client.content_types().await.unwrap_err();
    match err {
        ClientError::HttpStatus { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
}

/// A body that is not a types page is reported as malformed, not a panic.
#[tokio::test]
async fn test_malformed_page_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/env-1/types"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = TypesClient::builder("env-1")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    assert!(matches!(
        client.content_types().await,
        Err(ClientError::MalformedPage(_))
    ));
}
