mod common;

use axum_test::TestServer;
use shorturl::domain::entities::UrlRecord;
use shorturl::domain::repositories::KeyValueStore;
use shorturl::web::handlers::ALREADY_EXISTS_MESSAGE;

fn form<'a>(url: &'a str, alias: &'a str) -> [(&'static str, &'a str); 2] {
    [("originalURL", url), ("alias", alias)]
}

#[tokio::test]
async fn test_home_page_renders_form() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("originalURL"));
    assert!(body.contains("alias"));
}

#[tokio::test]
async fn test_shorten_with_generated_identifier() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();
    let config = common::test_config();

    let response = server
        .post("/short")
        .form(&form("https://example.com/some/path", ""))
        .await;

    response.assert_status_ok();

    let identifier = store
        .hash_get(&config.forward_table, "https://example.com/some/path")
        .await
        .unwrap()
        .expect("forward entry written");
    assert_eq!(identifier.len(), 12);
    assert!(response.text().contains(&identifier));
    assert!(!response.text().contains(ALREADY_EXISTS_MESSAGE));

    let raw = store
        .hash_get(&config.reverse_table, &identifier)
        .await
        .unwrap()
        .expect("reverse entry written");
    let record = UrlRecord::from_json(&raw).unwrap();
    assert_eq!(record.original_url, "https://example.com/some/path");
    assert_eq!(record.alias, None);
}

#[tokio::test]
async fn test_shorten_with_alias() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();
    let config = common::test_config();

    let response = server
        .post("/short")
        .form(&form("https://example.com", "my-alias"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("my-alias"));

    let identifier = store
        .hash_get(&config.forward_table, "https://example.com")
        .await
        .unwrap();
    assert_eq!(identifier.as_deref(), Some("my-alias"));

    let redirect = server.get("/my-alias").await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_shorten_same_url_twice_reports_existing() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();
    let config = common::test_config();

    server
        .post("/short")
        .form(&form("https://example.com/again", ""))
        .await
        .assert_status_ok();

    let response = server
        .post("/short")
        .form(&form("https://example.com/again", ""))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(ALREADY_EXISTS_MESSAGE));

    assert_eq!(store.field_count(&config.forward_table), 1);
    assert_eq!(store.field_count(&config.reverse_table), 1);
}

#[tokio::test]
async fn test_shorten_existing_url_ignores_new_alias() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();
    let config = common::test_config();

    server
        .post("/short")
        .form(&form("https://example.com", "first"))
        .await
        .assert_status_ok();

    let response = server
        .post("/short")
        .form(&form("https://example.com", "second"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains(ALREADY_EXISTS_MESSAGE));
    assert!(response.text().contains("first"));

    assert!(
        store
            .hash_get(&config.reverse_table, "second")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.post("/short").form(&form("", "")).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("URL field cannot be empty"));
    assert_eq!(store.field_count(&common::test_config().forward_table), 0);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/short")
        .form(&[("alias", "lonely")])
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("URL field cannot be empty"));
}

#[tokio::test]
async fn test_shorten_without_body() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.post("/short").await;

    response.assert_status_bad_request();
    assert!(response.text().contains("URL field cannot be empty"));
    assert_eq!(store.field_count(&common::test_config().forward_table), 0);
}

#[tokio::test]
async fn test_shorten_body_not_url_encoded() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/short")
        .text("originalURL=https://example.com")
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("URL field cannot be empty"));
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.post("/short").form(&form("not a url", "")).await;

    response.assert_status_bad_request();
    assert!(response.text().contains("invalid url"));
}

#[tokio::test]
async fn test_shorten_invalid_alias() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    for alias in ["bad.alias", "has?query", "this-alias-is-too-long", "healthz"] {
        let response = server
            .post("/short")
            .form(&form("https://example.com", alias))
            .await;

        response.assert_status_bad_request();
        assert!(
            response.text().contains("invalid alias"),
            "alias {alias} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_shorten_alias_taken_by_other_url() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    server
        .post("/short")
        .form(&form("https://example.com/one", "taken"))
        .await
        .assert_status_ok();

    let response = server
        .post("/short")
        .form(&form("https://example.com/two", "taken"))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("given alias already exists"));

    let redirect = server.get("/taken").await;
    assert_eq!(redirect.header("location"), "https://example.com/one");
}

#[tokio::test]
async fn test_shorten_store_down() {
    let server = TestServer::new(common::create_down_app()).unwrap();

    let response = server
        .post("/short")
        .form(&form("https://example.com", ""))
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(response.text().contains("Please try again after some time"));
    assert!(!response.text().contains("connection refused"));
}
