//! Value codec
//!
//! Typed values are stored as JSON. Raw byte payloads bypass this module
//! entirely, so a value that is already a serialized string is never encoded
//! twice.

use crate::error_ext::ErrorContext;
use npc_domain::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode a value to its cached byte form
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).serialization_context("Failed to encode cache value")
}

/// Decode a cached byte payload
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).serialization_context("Failed to decode cache value")
}
