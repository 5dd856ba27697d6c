//! Tests for the Redis remote store
//!
//! Tests that talk to a server are ignored by default. Run them with
//! `REDIS_URL=redis://localhost:6379 cargo test -p npc-providers --test unit -- --ignored`.

use npc_domain::BackendFailure;
use npc_providers::constants::REDIS_DEFAULT_URL;
use npc_providers::remote::RedisRemoteStore;
use npc_providers::{Error, RemoteStore};
use std::time::Duration;

fn redis_url() -> String {
    std::env::var("REDIS_URL").unwrap_or_else(|_| REDIS_DEFAULT_URL.to_string())
}

#[test]
fn test_invalid_url_is_a_configuration_error() {
    let err = RedisRemoteStore::new("not a url").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_debug_hides_credentials() {
    let store = RedisRemoteStore::new("redis://:s3cret@cache.internal:6379/0").unwrap();
    let rendered = format!("{store:?}");
    assert!(!rendered.contains("s3cret"));
    assert_eq!(store.endpoint(), "redis://cache.internal:6379/0");
    assert_eq!(store.provider_name(), "redis");
}

#[tokio::test]
async fn test_unreachable_server_reports_connection_failure() {
    // Port 1 is never a Redis server
    let store = RedisRemoteStore::with_host_port("127.0.0.1", 1).unwrap();
    let err = store.ping().await.unwrap_err();
    assert!(err.is_backend_unavailable());
    assert!(!matches!(
        err,
        Error::BackendUnavailable {
            kind: BackendFailure::Cancelled,
            ..
        }
    ));
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn test_roundtrip_against_live_server() {
    let store = RedisRemoteStore::new(&redis_url()).unwrap();
    store.ping().await.unwrap();

    store
        .set("npc-test:roundtrip", b"payload", Duration::from_secs(30))
        .await
        .unwrap();
    let value = store.get("npc-test:roundtrip").await.unwrap();
    assert_eq!(value.as_deref(), Some(&b"payload"[..]));

    let keys = store.keys("npc-test:*").await.unwrap();
    assert!(keys.contains(&"npc-test:roundtrip".to_string()));

    let removed = store.delete(&keys).await.unwrap();
    assert!(removed >= 1);
    assert_eq!(store.get("npc-test:roundtrip").await.unwrap(), None);
}
