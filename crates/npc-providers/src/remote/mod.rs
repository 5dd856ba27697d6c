//! Remote Store Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`RedisRemoteStore`] | Distributed | Redis-backed, shared by all instances |
//! | [`InMemoryRemoteStore`] | Testing | Moka-backed stand-in with fault injection |
//!
//! ## Provider Selection Guide
//!
//! - **Multi Instance**: Use `RedisRemoteStore`
//! - **Development/Testing**: Use `InMemoryRemoteStore`, or no remote tier at all

#[cfg(feature = "remote-memory")]
pub mod memory;
#[cfg(feature = "remote-redis")]
pub mod redis;

#[cfg(feature = "remote-memory")]
pub use memory::InMemoryRemoteStore;
#[cfg(feature = "remote-redis")]
pub use redis::RedisRemoteStore;
