//! Metric and classification labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tier an observation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheTier {
    /// Bounded in-process store
    Local,
    /// Shared networked store
    Remote,
    /// Whole manager operation spanning both tiers
    Combined,
}

impl CacheTier {
    /// Label value for metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Combined => "combined",
        }
    }
}

impl fmt::Display for CacheTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an entry left the local tier without being deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionReason {
    /// TTL elapsed (lazy expiry on read or the periodic sweep)
    Expired,
    /// Least-recently-used entry dropped to make room
    Capacity,
}

impl EvictionReason {
    /// Label value for metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::Capacity => "capacity",
        }
    }
}

impl fmt::Display for EvictionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a remote-tier failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendFailure {
    /// The call exceeded its deadline
    Timeout,
    /// The call was abandoned because the manager is shutting down
    Cancelled,
    /// The store could not be reached or the connection dropped
    Connection,
    /// The store answered with an error
    Command,
}

impl BackendFailure {
    /// Label value for metrics
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::Connection => "connection",
            Self::Command => "command",
        }
    }
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
