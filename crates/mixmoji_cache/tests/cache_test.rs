//! Tests for the metadata cache controller.

use mixmoji_cache::{CacheDescriptor, MetadataCache, RefreshOutcome};
use mixmoji_error::{FetchErrorKind, MixmojiErrorKind, StorageErrorKind};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"{
  "knownSupportedEmoji": ["1f602"],
  "data": {"1f602": {"combinations": {}}}
}"#;

const ETAG: &str = "\"v1\"";
const LAST_MODIFIED: &str = "Wed, 21 Oct 2015 07:28:00 GMT";

fn cache_for(server: &MockServer, dir: &TempDir) -> MetadataCache {
    MetadataCache::new(
        dir.path(),
        format!("{}/metadata.json", server.uri()),
        Duration::from_secs(5),
    )
}

fn full_response() -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(BODY, "application/json")
        .insert_header("etag", ETAG)
        .insert_header("last-modified", LAST_MODIFIED)
}

#[tokio::test]
async fn test_first_fetch_writes_content_and_descriptor() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(full_response())
        .expect(1)
        .mount(&server)
        .await;

    assert!(!cache.has_metadata().await);
    let outcome = cache.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Updated);

    assert!(cache.has_metadata().await);
    let written = tokio::fs::read_to_string(cache.metadata_path())
        .await
        .unwrap();
    assert_eq!(written, BODY);

    let descriptor = CacheDescriptor::read(&cache.descriptor_path())
        .await
        .unwrap();
    assert_eq!(descriptor.etag.as_deref(), Some(ETAG));
    assert_eq!(descriptor.last_modified.as_deref(), Some(LAST_MODIFIED));
}

#[tokio::test]
async fn test_revalidation_carries_tokens_and_304_leaves_disk_alone() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(full_response())
        .expect(1)
        .mount(&server)
        .await;
    cache.refresh().await.unwrap();
    server.reset().await;

    // Only a request carrying both persisted validators matches; anything
    // else falls through to wiremock's 404 and fails the refresh.
    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .and(header("if-none-match", ETAG))
        .and(header("if-modified-since", LAST_MODIFIED))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = cache.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::NotModified);

    let on_disk = tokio::fs::read_to_string(cache.metadata_path())
        .await
        .unwrap();
    assert_eq!(on_disk, BODY);
}

#[tokio::test]
async fn test_empty_body_keeps_cached_copy() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(full_response())
        .expect(1)
        .mount(&server)
        .await;
    cache.refresh().await.unwrap();
    server.reset().await;

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = cache.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::NotModified);

    let on_disk = tokio::fs::read_to_string(cache.metadata_path())
        .await
        .unwrap();
    assert_eq!(on_disk, BODY);
}

#[tokio::test]
async fn test_empty_body_on_first_fetch_writes_nothing() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let outcome = cache.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::NotModified);
    assert!(!cache.has_metadata().await);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = cache.refresh().await.unwrap_err();
    assert!(matches!(
        err.kind(),
        MixmojiErrorKind::Fetch(e) if e.kind == FetchErrorKind::Status(500)
    ));
    assert!(!cache.has_metadata().await);
}

#[tokio::test]
async fn test_timeout_maps_to_timeout_kind() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = MetadataCache::new(
        temp_dir.path(),
        format!("{}/metadata.json", server.uri()),
        Duration::from_millis(200),
    );

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(full_response().set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let err = cache.refresh().await.unwrap_err();
    assert!(matches!(
        err.kind(),
        MixmojiErrorKind::Fetch(e) if e.kind == FetchErrorKind::Timeout
    ));
}

#[tokio::test]
async fn test_corrupt_descriptor_downgrades_to_unconditional_fetch() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    tokio::fs::create_dir_all(temp_dir.path()).await.unwrap();
    tokio::fs::write(cache.descriptor_path(), b"not json at all")
        .await
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(full_response())
        .expect(1)
        .mount(&server)
        .await;

    let outcome = cache.refresh().await.unwrap();
    assert_eq!(outcome, RefreshOutcome::Updated);

    // The corrupt descriptor was replaced with a valid one
    let descriptor = CacheDescriptor::read(&cache.descriptor_path())
        .await
        .unwrap();
    assert_eq!(descriptor.etag.as_deref(), Some(ETAG));
}

#[tokio::test]
async fn test_read_document_parses_written_file() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let cache = cache_for(&server, &temp_dir);

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(full_response())
        .mount(&server)
        .await;
    cache.refresh().await.unwrap();

    let doc = cache.read_document().await.unwrap();
    assert_eq!(doc.known_supported_emoji, vec!["1f602"]);
    assert!(doc.entry("1f602").is_some());
}

#[tokio::test]
async fn test_read_document_without_file_is_missing_metadata() {
    let temp_dir = TempDir::new().unwrap();
    let cache = MetadataCache::new(
        temp_dir.path(),
        "http://127.0.0.1:9/metadata.json",
        Duration::from_secs(1),
    );

    let err = cache.read_document().await.unwrap_err();
    assert!(matches!(
        err.kind(),
        MixmojiErrorKind::Storage(e)
            if matches!(e.kind, StorageErrorKind::MissingMetadata(_))
    ));
}
