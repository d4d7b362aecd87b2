#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! `HttpUserSource` against a mock endpoint

use serde_json::json;
use user_directory_core::{HttpUserSource, LoadError, UserSource};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn leanne_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "a@b.com",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        },
        "phone": "555",
        "website": "leanne.com",
        "company": { "name": "Romaguera-Crona" }
    })
}

fn source_for(server: &MockServer) -> HttpUserSource {
    HttpUserSource::new(format!("{}/users", server.uri()))
}

#[tokio::test]
async fn fetch_users_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([leanne_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let users = source_for(&server).fetch_users().await.unwrap();

    assert_eq!(users.len(), 1);
    let user = &users[0];
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Leanne Graham");
    assert_eq!(user.website_url(), "http://leanne.com");
    assert_eq!(user.address_line(), "Kulas Light, Apt. 556, Gwenborough");
    assert_eq!(user.company.name, "Romaguera-Crona");
}

#[tokio::test]
async fn fetch_users_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_users().await.unwrap_err();

    assert_eq!(err, LoadError::Status { status: 500 });
}

#[tokio::test]
async fn fetch_users_not_found() {
    let server = MockServer::start().await;

    let err = source_for(&server).fetch_users().await.unwrap_err();

    assert_eq!(err, LoadError::Status { status: 404 });
}

#[tokio::test]
async fn fetch_users_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch_users().await.unwrap_err();

    assert!(matches!(err, LoadError::Parse { .. }));
}

#[tokio::test]
async fn fetch_users_unreachable_host() {
    // Port 9 (discard) on localhost is not expected to accept connections
    let source = HttpUserSource::new("http://127.0.0.1:9/users");

    let err = source.fetch_users().await.unwrap_err();

    assert!(matches!(err, LoadError::Network { .. }));
}
