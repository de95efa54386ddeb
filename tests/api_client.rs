use igprofile::api::{InstagramClient, ProfileLookup};
use igprofile::error::LookupError;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/api/v1/users/web_profile_info/";

async fn mock_profile_response(server: &MockServer, username: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("username", username))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn maps_full_profile_response() {
    let server = MockServer::start().await;
    let body = json!({
        "data": {
            "user": {
                "username": "zuck",
                "full_name": "Mark Zuckerberg",
                "edge_followed_by": { "count": 12000000 },
                "edge_follow": { "count": 500 },
                "edge_owner_to_timeline_media": { "count": 300 },
                "profile_pic_url": "https://cdn.example.com/zuck.jpg",
                "is_private": false,
                "is_verified": true,
                "biography": "Building things",
                "external_url": "https://meta.com",
                "business_category_name": null,
                "is_business_account": false
            }
        },
        "status": "ok"
    });

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("username", "zuck"))
        .and(header("x-ig-app-id", "936619743392459"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = InstagramClient::with_base_url(server.uri());
    let source = client.profile("zuck").await.expect("lookup");

    assert_eq!(source.username, "zuck");
    assert_eq!(source.full_name.as_deref(), Some("Mark Zuckerberg"));
    assert_eq!(source.followers, 12_000_000);
    assert_eq!(source.followees, 500);
    assert_eq!(source.media_count, 300);
    assert!(!source.is_private);
    assert!(source.is_verified);
    assert_eq!(source.business_category_name, None);
}

#[tokio::test]
async fn null_user_is_not_found() {
    let server = MockServer::start().await;
    let body = json!({ "data": { "user": null }, "status": "ok" });
    mock_profile_response(&server, "nouser123", ResponseTemplate::new(200).set_body_json(body))
        .await;

    let client = InstagramClient::with_base_url(server.uri());
    let err = client.profile("nouser123").await.expect_err("must fail");
    assert!(matches!(err, LookupError::NotFound));
}

#[tokio::test]
async fn http_404_is_not_found() {
    let server = MockServer::start().await;
    mock_profile_response(&server, "nouser123", ResponseTemplate::new(404)).await;

    let client = InstagramClient::with_base_url(server.uri());
    let err = client.profile("nouser123").await.expect_err("must fail");
    assert!(matches!(err, LookupError::NotFound));
}

#[tokio::test]
async fn login_gate_is_private_signal() {
    let server = MockServer::start().await;
    mock_profile_response(&server, "ghost", ResponseTemplate::new(401)).await;

    let client = InstagramClient::with_base_url(server.uri());
    let err = client.profile("ghost").await.expect_err("must fail");
    assert!(matches!(err, LookupError::PrivateNotFollowed));
}

#[tokio::test]
async fn rate_limit_is_connection_error() {
    let server = MockServer::start().await;
    mock_profile_response(&server, "zuck", ResponseTemplate::new(429)).await;

    let client = InstagramClient::with_base_url(server.uri());
    let err = client.profile("zuck").await.expect_err("must fail");
    assert!(matches!(err, LookupError::Connection(_)));
}

#[tokio::test]
async fn server_error_is_connection_error() {
    let server = MockServer::start().await;
    mock_profile_response(&server, "zuck", ResponseTemplate::new(500)).await;

    let client = InstagramClient::with_base_url(server.uri());
    let err = client.profile("zuck").await.expect_err("must fail");
    assert!(matches!(err, LookupError::Connection(_)));
}

#[tokio::test]
async fn html_interstitial_is_connection_error() {
    let server = MockServer::start().await;
    mock_profile_response(
        &server,
        "zuck",
        ResponseTemplate::new(200).set_body_string("<html>Please wait...</html>"),
    )
    .await;

    let client = InstagramClient::with_base_url(server.uri());
    let err = client.profile("zuck").await.expect_err("must fail");
    assert!(matches!(err, LookupError::Connection(_)));
}

#[tokio::test]
async fn public_lookup_keeps_only_public_fields() {
    let server = MockServer::start().await;
    let body = json!({
        "data": {
            "user": {
                "username": "ghost",
                "full_name": "Ghost Account",
                "profile_pic_url": "https://cdn.example.com/ghost.jpg",
                "is_verified": true
            }
        },
        "status": "ok"
    });
    mock_profile_response(&server, "ghost", ResponseTemplate::new(200).set_body_json(body)).await;

    let client = InstagramClient::with_base_url(server.uri());
    let public = client.public_profile("ghost").await.expect("lookup");

    assert_eq!(public.username, "ghost");
    assert_eq!(public.full_name.as_deref(), Some("Ghost Account"));
    assert_eq!(
        public.profile_pic_url.as_deref(),
        Some("https://cdn.example.com/ghost.jpg")
    );
    assert!(public.is_verified);
}
