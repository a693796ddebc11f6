// Integration tests for `StationClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aquaview_api::{Error, StationClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, StationClient) {
    let server = MockServer::start().await;
    let endpoint = format!("{}/items", server.uri())
        .parse()
        .expect("mock server URI");
    let client = StationClient::with_client(reqwest::Client::new(), endpoint);
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_readings() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "timestamp": "2026-08-01T10:00:00Z",
            "water_level": 62.5,
            "temperature": 24.1,
            "humidity": 58.0,
            "wind_speed": 12.3
        },
        {
            "timestamp": "2026-08-01T09:59:55Z",
            "water_level": 61.9,
            "temperature": 24.0,
            "humidity": 58.2
        },
    ]);

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let readings = client.fetch_readings().await.unwrap();

    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].water_level, Some(62.5));
    assert_eq!(readings[0].wind_speed, Some(12.3));
    assert_eq!(readings[1].wind_speed, None);
    assert_eq!(readings[1].timestamp.as_deref(), Some("2026-08-01T09:59:55Z"));
}

#[tokio::test]
async fn test_camel_case_water_level_accepted() {
    let (server, client) = setup().await;

    // Older station firmware sends waterLevel; both spellings must decode.
    let body = json!([
        { "waterLevel": 80.0, "temperature": 30.0, "humidity": 40.0 },
    ]);

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let readings = client.fetch_readings().await.unwrap();

    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].water_level, Some(80.0));
    assert_eq!(readings[0].timestamp, None);
}

#[tokio::test]
async fn test_empty_array() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let readings = client.fetch_readings().await.unwrap();
    assert!(readings.is_empty());
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_500_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.fetch_readings().await;

    match result {
        Err(Error::Http { status }) => assert_eq!(status, 500),
        other => panic!("expected Http 500 error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_404_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.fetch_readings().await;

    assert!(
        matches!(result, Err(Error::Http { status: 404 })),
        "expected Http 404, got: {result:?}"
    );
}

#[tokio::test]
async fn test_error_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let result = client.fetch_readings().await;

    match result {
        Err(Error::Decode { body, .. }) => assert_eq!(body, "not json at all"),
        other => panic!("expected Decode error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_wrong_shape() {
    let (server, client) = setup().await;

    // An object where an array is expected is a decode failure, not a panic.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let result = client.fetch_readings().await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_transient_classification() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.fetch_readings().await.unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.status(), Some(503));
}
