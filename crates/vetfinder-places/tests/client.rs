//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use serde_json::json;
use vetfinder_places::{PlacesClient, PlacesError, PlacesGateway, TextSearchRequest};
use wiremock::matchers::{body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url(5, 1, "vetfinder-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn request() -> TextSearchRequest {
    TextSearchRequest::new("Emergency vet / pet clinic open now 98102", true, 8046.72)
}

#[tokio::test]
async fn search_text_sends_credential_field_mask_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(header_exists("X-Goog-FieldMask"))
        .and(body_partial_json(json!({
            "textQuery": "Emergency vet / pet clinic open now 98102",
            "openNow": true,
            "locationBias": { "circle": { "radius": 8046.72 } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "places": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .search_text("test-key", &request())
        .await
        .expect("search should succeed");

    assert!(places.is_empty());
}

#[tokio::test]
async fn search_text_parses_places() {
    let server = MockServer::start().await;

    let body = json!({
        "places": [
            {
                "displayName": { "text": "Seattle Emergency Vets", "languageCode": "en" },
                "formattedAddress": "4102 Stone Way N, Seattle, WA 98103, USA",
                "rating": 4.3,
                "userRatingCount": 812,
                "internationalPhoneNumber": "+1 206-634-9000",
                "location": { "latitude": 47.657, "longitude": -122.342 },
                "websiteUri": "https://example.com/sev",
                "currentOpeningHours": {
                    "openNow": true,
                    "weekdayDescriptions": ["Monday: Open 24 hours"]
                }
            },
            {
                "displayName": { "text": "BluePearl Pet Hospital" },
                "formattedAddress": "14810 NE 24th St, Redmond, WA 98052, USA"
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1/places:searchText"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .search_text("test-key", &request())
        .await
        .expect("should parse places");

    assert_eq!(places.len(), 2);
    assert_eq!(places[0].display_name_text(), Some("Seattle Emergency Vets"));
    assert_eq!(places[0].user_rating_count, Some(812));
    assert_eq!(
        places[0].website_uri.as_deref(),
        Some("https://example.com/sev")
    );
    assert!(places[0].opening_hours().is_some());
    assert!(places[1].rating.is_none());
    assert!(places[1].location.is_none());
}

#[tokio::test]
async fn search_text_treats_missing_places_key_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let places = client
        .search_text("test-key", &request())
        .await
        .expect("empty response is not an error");
    assert!(places.is_empty());
}

#[tokio::test]
async fn search_text_surfaces_upstream_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {
                "code": 403,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search_text("bad-key", &request())
        .await
        .expect_err("403 should fail");

    assert_eq!(err.status(), Some(403));
    match err {
        PlacesError::UnexpectedStatus { status, message } => {
            assert_eq!(status, 403);
            assert!(message.starts_with("API key not valid"), "{message}");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn search_text_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .search_text("test-key", &request())
        .await
        .expect_err("malformed body should fail");
    assert!(matches!(err, PlacesError::Deserialize { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn search_text_reports_transport_failure() {
    // Nothing listens on port 1.
    let client = test_client("http://127.0.0.1:1");
    let err = client
        .search_text("test-key", &request())
        .await
        .expect_err("connection should fail");
    assert!(matches!(err, PlacesError::Http(_)));
}

#[tokio::test]
async fn search_text_gives_up_on_unreachable_host_within_connect_timeout() {
    // TEST-NET-1 address; connections either hang until the connect
    // timeout or fail immediately, never succeed.
    let client = PlacesClient::with_base_url(30, 1, "vetfinder-test/0.1", "http://192.0.2.1:81")
        .expect("client construction should not fail");
    let started = std::time::Instant::now();
    let err = client
        .search_text("test-key", &request())
        .await
        .expect_err("connection should fail");
    assert!(matches!(err, PlacesError::Http(_)));
    assert!(
        started.elapsed() < std::time::Duration::from_secs(10),
        "took {:?}, request timeout was used instead of connect timeout",
        started.elapsed()
    );
}
