//! Integration tests using mock HTTP server
//!
//! Tests the full flow: collection listing → concurrent detail fetches → enriched page

use pokedex_loader::config::HttpSettings;
use pokedex_loader::{CollectionLoader, Error, LoaderConfig, PageReference};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> LoaderConfig {
    LoaderConfig::default().with_base_url(format!("{}/api/v2/", server.uri()))
}

fn stub(server: &MockServer, name: &str, id: u32) -> Value {
    json!({"name": name, "url": format!("{}/api/v2/pokemon/{id}/", server.uri())})
}

fn detail(name: &str, id: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "sprites": {"front_default": format!("https://img.example/{id}.png")}
    })
}

async fn mount_detail(server: &MockServer, name: &str, id: u32, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v2/pokemon/{id}/")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(detail(name, id))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Listing order under reversed completion
// ============================================================================

#[tokio::test]
async fn test_first_page_preserves_listing_order() {
    let server = MockServer::start().await;
    let page2 = format!("{}/api/v2/pokemon?offset=2&limit=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 4,
            "next": page2,
            "previous": null,
            "results": [stub(&server, "bulbasaur", 1), stub(&server, "ivysaur", 2)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // bulbasaur resolves after ivysaur
    mount_detail(&server, "bulbasaur", 1, Duration::from_millis(200)).await;
    mount_detail(&server, "ivysaur", 2, Duration::ZERO).await;

    let loader = CollectionLoader::new(config_for(&server)).unwrap();
    let result = loader.load_default_first_page().await.unwrap();

    let names: Vec<_> = result.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    assert_eq!(result.items[0].record["id"], 1);
    assert_eq!(result.next_page.unwrap().as_str(), page2);
}

// ============================================================================
// Continuation
// ============================================================================

#[tokio::test]
async fn test_follow_cursor_to_end() {
    let server = MockServer::start().await;
    let page2 = format!("{}/api/v2/pokemon?offset=1&limit=1", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .and(query_param("limit", "1"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "results": [stub(&server, "charmander", 4)]
        })))
        .mount(&server)
        .await;

    mount_detail(&server, "charmander", 4, Duration::ZERO).await;

    let loader = CollectionLoader::new(config_for(&server).with_page_size(1)).unwrap();
    let reference = PageReference::parse(&page2).unwrap();
    let result = loader.load_next_page(&reference).await.unwrap();

    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].name, "charmander");
    assert!(result.next_page.is_none());
}

#[tokio::test]
async fn test_empty_listing_with_cursor_is_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": format!("{}/api/v2/pokemon?offset=180&limit=20", server.uri()),
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let loader = CollectionLoader::new(config_for(&server)).unwrap();
    let result = loader.load_default_first_page().await.unwrap();

    assert!(result.items.is_empty());
    assert!(result.next_page.is_none());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_detail_failure_fails_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "results": [stub(&server, "bulbasaur", 1), stub(&server, "ivysaur", 2)]
        })))
        .mount(&server)
        .await;

    mount_detail(&server, "bulbasaur", 1, Duration::ZERO).await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/2/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let loader = CollectionLoader::new(config_for(&server)).unwrap();
    let err = loader.load_default_first_page().await.unwrap_err();

    assert!(err.is_network());
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_listing_failure_fails_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let loader = CollectionLoader::new(config_for(&server)).unwrap();
    let err = loader.load_default_first_page().await.unwrap_err();

    assert!(err.is_network());
}

#[tokio::test]
async fn test_retry_layer_recovers_transient_detail_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": null,
            "results": [stub(&server, "snorlax", 143)]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/143/"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/143/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail("snorlax", 143)))
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.http = HttpSettings {
        max_retries: 2,
        initial_backoff_ms: 10,
        ..HttpSettings::default()
    };

    let loader = CollectionLoader::new(config).unwrap();
    let result = loader.load_default_first_page().await.unwrap();

    assert_eq!(result.items[0].name, "snorlax");
}

#[tokio::test]
async fn test_configured_headers_reach_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/ditto"))
        .and(header("Accept-Language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail("ditto", 132)))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config
        .http
        .headers
        .insert("Accept-Language".to_string(), "en".to_string());

    let loader = CollectionLoader::new(config).unwrap();
    let item = loader.load_item("ditto").await.unwrap();

    assert_eq!(item.record["id"], 132);
}

// ============================================================================
// Item lookup
// ============================================================================

#[tokio::test]
async fn test_show_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60
        })))
        .mount(&server)
        .await;

    let loader = CollectionLoader::new(config_for(&server)).unwrap();
    let profile = loader.load_item("pikachu").await.unwrap().profile();

    assert_eq!(profile.id, Some(25));
    assert_eq!(profile.weight_kg, Some(6.0));
}

#[tokio::test]
async fn test_show_unknown_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let loader = CollectionLoader::new(config_for(&server)).unwrap();
    let err = loader.load_item("missingno").await.unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
}
