//! Integration tests for the HTTP boundary.
//!
//! These tests drive the real router with the example integrations seeded
//! from fixtures, plus mock item types for failure handling.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use linkable_api::contrib::register_all;
use linkable_api::fixtures::Fixtures;
use linkable_api::server::{create_app, state::AppState};
use linkable_registry::{
    FailureMode, ItemType, LinkableError, Registry, RegistryConfig, SearchPage, SearchRequest,
};

const FIXTURES: &str = r#"{
    "pages": [
        {"pk": "1", "fields": {"title": "Contact"}, "url": "/en/contact/"},
        {"pk": "2", "fields": {"title": "About us"}, "url": "/en/about/"},
        {"pk": "3", "fields": {"title": "Contact form"}, "url": "/en/contact/form/"}
    ],
    "files": [
        {"pk": "10", "fields": {"name": "contact.vcf", "description": "Office card"}, "url": "/media/contact.vcf"},
        {"pk": "11", "fields": {"name": "logo.png"}, "url": "/media/logo.png"}
    ]
}"#;

// Item type whose backend is always down
struct BrokenItemType;

#[async_trait]
impl ItemType for BrokenItemType {
    async fn search(&self, _request: &SearchRequest) -> Result<SearchPage, LinkableError> {
        Err(LinkableError::backend("index unavailable"))
    }

    fn identifier(&self) -> Option<String> {
        Some("broken".to_string())
    }

    fn verbose_name(&self) -> Option<String> {
        Some("Broken".to_string())
    }
}

// Item type that never implemented search
struct UnfinishedItemType;

#[async_trait]
impl ItemType for UnfinishedItemType {
    async fn search(&self, _request: &SearchRequest) -> Result<SearchPage, LinkableError> {
        Err(LinkableError::not_implemented("search"))
    }

    fn identifier(&self) -> Option<String> {
        Some("unfinished".to_string())
    }
}

fn registry(config: RegistryConfig) -> Arc<Registry> {
    let registry = Registry::with_config(config);
    register_all(&registry, Fixtures::from_json(FIXTURES).unwrap()).unwrap();
    Arc::new(registry)
}

fn app(registry: Arc<Registry>) -> Router {
    create_app(AppState::new(registry), CorsLayer::new())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let response = app(registry(RegistryConfig::default()))
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_list_item_types() {
    let (status, body) = get(app(registry(RegistryConfig::default())), "/item_types/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!([
            {"identifier": "cms_page", "verbose_name": "Page", "short_name": "Page"},
            {"identifier": "filer_file", "verbose_name": "File", "short_name": "File"}
        ])
    );
}

#[tokio::test]
async fn test_get_item_type() {
    let (status, body) = get(
        app(registry(RegistryConfig::default())),
        "/item_types/filer_file/",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["identifier"], "filer_file");
    assert_eq!(body["verbose_name"], "File");
}

#[tokio::test]
async fn test_unknown_item_type_is_not_found() {
    let (status, body) = get(
        app(registry(RegistryConfig::default())),
        "/item_types/nope/",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_search_aggregates_in_registry_order() {
    let (status, body) = get(
        app(registry(RegistryConfig::default())),
        "/items/search?q=contact",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let identifiers: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["identifier"].as_str().unwrap())
        .collect();
    // pages ordered by title, then files
    assert_eq!(identifiers, vec!["1", "3", "10"]);

    assert_eq!(
        body[2],
        serde_json::json!({
            "identifier": "10",
            "verbose_name": "contact.vcf",
            "short_name": "contact.vcf",
            "description": "Office card",
            "urls": [{"name": "canonical", "url": "/media/contact.vcf"}]
        })
    );
}

#[tokio::test]
async fn test_pages_carry_the_default_thumbnail() {
    let (status, body) = get(
        app(registry(RegistryConfig::default())),
        "/items/search?q=contact",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body[0]["thumbnail"],
        serde_json::json!({"kind": "url", "url": "/static/linkable/page.svg"})
    );
    assert!(body[2].get("thumbnail").is_none());
}

#[tokio::test]
async fn test_search_with_trailing_slash_and_limit() {
    let (status, body) = get(
        app(registry(RegistryConfig::default())),
        "/items/search/?q=contact&limit=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // one result per item type
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_without_query_returns_everything() {
    let (status, body) = get(app(registry(RegistryConfig::default())), "/items/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_search_with_zero_limit_is_bad_request() {
    let (status, _) = get(
        app(registry(RegistryConfig::default())),
        "/items/search?q=contact&limit=0",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_failing_item_type_fails_the_search() {
    let registry = registry(RegistryConfig::default());
    registry.register(Arc::new(BrokenItemType)).unwrap();

    let (status, body) = get(app(registry), "/items/search?q=contact").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["message"].as_str().unwrap().contains("broken"));
}

#[tokio::test]
async fn test_failing_item_type_is_isolated() {
    let registry = registry(RegistryConfig::default().with_failure_mode(FailureMode::Isolate));
    registry.register(Arc::new(BrokenItemType)).unwrap();

    let (status, body) = get(app(registry), "/items/search?q=contact").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unimplemented_item_type_is_a_server_error() {
    let registry = registry(RegistryConfig::default().with_failure_mode(FailureMode::Isolate));
    registry.register(Arc::new(UnfinishedItemType)).unwrap();

    let (status, _) = get(app(registry), "/items/search?q=contact").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
