//! End-to-end tests for the bootstrap, lookup, and revalidation flow.

use mixmoji::{
    CacheDescriptor, CommandReply, MixmojiPlugin, PluginConfigBuilder, RefreshOutcome, encode,
};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOC: &str = r#"{
  "knownSupportedEmoji": ["1f602", "1f436"],
  "data": {
    "1f602": {
      "combinations": {
        "1f436": [
          {"gStaticUrl": "https://gstatic.example/laugh-dog.png", "isLatest": true}
        ]
      }
    }
  }
}"#;

#[tokio::test]
async fn test_cold_start_to_lookup_to_revalidation() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(DOC, "application/json")
                .insert_header("etag", "\"v1\"")
                .insert_header("last-modified", "Wed, 21 Oct 2015 07:28:00 GMT"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = PluginConfigBuilder::default()
        .metadata_url(format!("{}/metadata.json", server.uri()))
        .data_dir(Some(temp_dir.path().to_path_buf()))
        .build()
        .unwrap();
    let plugin = MixmojiPlugin::new(config);

    // Cold start: nothing on disk, bootstrap downloads and loads
    plugin.bootstrap().await.unwrap();
    assert_eq!(
        plugin.mix("😂🐶").unwrap(),
        CommandReply::Image("https://gstatic.example/laugh-dog.png".to_string())
    );

    // Both files landed together
    let descriptor = CacheDescriptor::read(&temp_dir.path().join("metadata.cache.json"))
        .await
        .unwrap();
    assert_eq!(descriptor.etag.as_deref(), Some("\"v1\""));

    // The very next refresh revalidates with the persisted tokens
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/metadata.json"))
        .and(header("if-none-match", "\"v1\""))
        .and(header("if-modified-since", "Wed, 21 Oct 2015 07:28:00 GMT"))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = plugin.refresh_now().await.unwrap();
    assert_eq!(format!("{}", outcome), "unchanged");
    assert_eq!(outcome, RefreshOutcome::NotModified);

    // Lookups keep serving from the untouched snapshot
    assert_eq!(
        plugin.mix("😂🐶").unwrap(),
        CommandReply::Image("https://gstatic.example/laugh-dog.png".to_string())
    );
}

#[tokio::test]
async fn test_warm_start_serves_without_network() {
    let temp_dir = TempDir::new().unwrap();
    tokio::fs::write(temp_dir.path().join("metadata.json"), DOC)
        .await
        .unwrap();

    let config = PluginConfigBuilder::default()
        .metadata_url("http://127.0.0.1:9/metadata.json".to_string())
        .data_dir(Some(temp_dir.path().to_path_buf()))
        .build()
        .unwrap();
    let plugin = MixmojiPlugin::new(config);

    plugin.bootstrap().await.unwrap();
    assert_eq!(plugin.supported().unwrap(), vec!["1f602", "1f436"]);
}

#[test]
fn test_lookup_key_derivation_matches_document_keys() {
    assert_eq!(encode("😂"), "1f602");
    assert_eq!(encode("🐶"), "1f436");
}
