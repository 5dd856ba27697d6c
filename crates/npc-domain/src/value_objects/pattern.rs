//! Invalidation pattern matching
//!
//! Only two wildcard forms exist: `*` alone matches every key, and a single
//! trailing `*` matches on the literal prefix before it. Any other pattern,
//! including one with an interior `*`, is an exact match.

use crate::constants::CACHE_PATTERN_WILDCARD;

/// Whether `key` is selected by `pattern`
pub fn matches_pattern(key: &str, pattern: &str) -> bool {
    if pattern.len() == 1 && pattern.starts_with(CACHE_PATTERN_WILDCARD) {
        return true;
    }
    match pattern.strip_suffix(CACHE_PATTERN_WILDCARD) {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}
