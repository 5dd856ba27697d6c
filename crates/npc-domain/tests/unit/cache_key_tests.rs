//! Unit tests for cache key construction

use npc_domain::{CacheKey, build_key, namespace_pattern};
use std::time::Duration;

#[test]
fn test_build_key_without_version() {
    assert_eq!(build_key("foods", "apple", None), "foods:apple");
}

#[test]
fn test_build_key_with_version() {
    assert_eq!(build_key("foods", "apple", Some("3")), "foods:apple:v3");
}

#[test]
fn test_cache_key_builder_matches_build_key() {
    let key = CacheKey::new("recipes", "42").with_version("1");
    assert_eq!(key.full_key(), build_key("recipes", "42", Some("1")));
    assert_eq!(key.to_string(), "recipes:42:v1");
}

#[test]
fn test_full_key_is_deterministic() {
    let a = CacheKey::new("workouts", "user-7").with_ttl_secs(60);
    let b = CacheKey::new("workouts", "user-7").with_ttl_secs(900);
    // TTL is not part of the identity string
    assert_eq!(a.full_key(), b.full_key());
}

#[test]
fn test_effective_ttl() {
    let default = Duration::from_secs(300);

    assert_eq!(CacheKey::new("ns", "k").effective_ttl(default), default);
    assert_eq!(
        CacheKey::new("ns", "k")
            .with_ttl(Duration::from_secs(5))
            .effective_ttl(default),
        Duration::from_secs(5)
    );
}

#[test]
fn test_namespace_pattern() {
    assert_eq!(namespace_pattern("foods"), "foods:*");
}
