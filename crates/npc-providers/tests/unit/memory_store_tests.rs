//! Tests for the in-memory remote store

use npc_providers::remote::InMemoryRemoteStore;
use npc_providers::{Error, RemoteStore};
use npc_domain::BackendFailure;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_set_then_get() {
    let store = InMemoryRemoteStore::new();
    store
        .set("foods:apple", b"{\"kcal\":52}", Duration::from_secs(60))
        .await
        .unwrap();

    let value = store.get("foods:apple").await.unwrap();
    assert_eq!(value.as_deref(), Some(&b"{\"kcal\":52}"[..]));
    assert_eq!(store.get("foods:pear").await.unwrap(), None);
}

#[tokio::test]
async fn test_entries_expire_after_their_ttl() {
    let store = InMemoryRemoteStore::new();
    store
        .set("short", b"1", Duration::from_millis(50))
        .await
        .unwrap();
    store.set("long", b"2", Duration::from_secs(60)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(120)).await;

    assert_eq!(store.get("short").await.unwrap(), None);
    assert!(store.get("long").await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_counts_existing_keys_only() {
    let store = InMemoryRemoteStore::new();
    store.set("a", b"1", Duration::from_secs(60)).await.unwrap();
    store.set("b", b"2", Duration::from_secs(60)).await.unwrap();

    let removed = store
        .delete(&["a".to_string(), "b".to_string(), "c".to_string()])
        .await
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(store.delete(&[]).await.unwrap(), 0);
}

#[tokio::test]
async fn test_keys_filters_by_pattern() {
    let store = InMemoryRemoteStore::new();
    for key in ["foods:apple", "foods:pear", "meals:lunch"] {
        store.set(key, b"x", Duration::from_secs(60)).await.unwrap();
    }

    let keys = store.keys("foods:*").await.unwrap();
    assert_eq!(keys, vec!["foods:apple".to_string(), "foods:pear".to_string()]);
    assert_eq!(store.keys("*").await.unwrap().len(), 3);
    assert_eq!(store.keys("meals:lunch").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unavailable_store_fails_every_call() {
    let store = InMemoryRemoteStore::new();
    store.set_available(false);

    let err = store.get("any").await.unwrap_err();
    assert!(matches!(
        err,
        Error::BackendUnavailable {
            kind: BackendFailure::Connection,
            ..
        }
    ));
    assert!(store.ping().await.is_err());
    assert!(store.keys("*").await.is_err());

    store.set_available(true);
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
async fn test_latency_is_applied() {
    let store = InMemoryRemoteStore::new();
    store.set_latency(Duration::from_millis(40));

    let start = Instant::now();
    store.ping().await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(40));
}

#[tokio::test]
async fn test_clones_share_state() {
    let store = InMemoryRemoteStore::new();
    let other = store.clone();
    store.set("k", b"v", Duration::from_secs(60)).await.unwrap();

    assert!(other.get("k").await.unwrap().is_some());
    assert_eq!(other.provider_name(), "memory");
}
