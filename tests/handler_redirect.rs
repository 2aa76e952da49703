mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use shorturl::api::handlers::redirect_handler;

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    let app = Router::new()
        .route("/{id}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::seed_record(&store, "redirect1", "https://example.com/target", None).await;

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_alias() {
    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    common::seed_record(&store, "docs", "https://example.com/docs", Some("docs")).await;

    let response = server.get("/docs").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/docs");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["message"],
        "original url for the given short url does not exist"
    );
}

#[tokio::test]
async fn test_redirect_undecodable_identifier() {
    let (app, _store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/%FF").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["message"],
        "original url for the given short url does not exist"
    );
}

#[tokio::test]
async fn test_redirect_store_down() {
    let server = TestServer::new(common::create_down_app()).unwrap();

    let response = server.get("/anything").await;

    assert_eq!(response.status_code(), 500);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Please try again after some time");
}

#[tokio::test]
async fn test_redirect_malformed_record() {
    use shorturl::domain::repositories::KeyValueStore;

    let (app, store) = common::create_test_app();
    let server = TestServer::new(app).unwrap();

    let reverse_table = common::test_config().reverse_table;
    store
        .hash_set(&reverse_table, "broken", "not json")
        .await
        .unwrap();

    let response = server.get("/broken").await;

    assert_eq!(response.status_code(), 500);
}
