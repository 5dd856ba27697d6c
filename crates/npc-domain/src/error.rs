//! Error handling types

use crate::value_objects::BackendFailure;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the nutrition platform cache
#[derive(Error, Debug)]
pub enum Error {
    /// Neither tier holds the requested key
    ///
    /// This is the expected outcome of a cold read and is never logged as an error.
    #[error("Cache miss: {key}")]
    CacheMiss {
        /// Fully-qualified key that was looked up
        key: String,
    },

    /// A value could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialized value exceeds the configured maximum; nothing was cached
    #[error("Value too large: {size} bytes exceeds limit of {limit} bytes")]
    ValueTooLarge {
        /// Serialized size of the rejected value
        size: usize,
        /// Configured maximum value size
        limit: usize,
    },

    /// The remote tier is unreachable, timed out or returned a transport error
    #[error("Backend unavailable ({kind}): {message}")]
    BackendUnavailable {
        /// Classification of the failure
        kind: BackendFailure,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Pattern invalidation did not complete against the remote tier
    ///
    /// The local tier is always fully invalidated before this is returned.
    #[error("Partial invalidation of '{pattern}': {removed} remote keys removed, {} failures", .errors.len())]
    PartialInvalidation {
        /// Pattern that was being invalidated
        pattern: String,
        /// Number of remote keys that were removed before failures occurred
        removed: u64,
        /// One message per failed remote step
        errors: Vec<String>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

// Cache error creation methods
impl Error {
    /// Create a cache miss error for a fully-qualified key
    pub fn cache_miss<S: Into<String>>(key: S) -> Self {
        Self::CacheMiss { key: key.into() }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Create a value-too-large error
    pub fn value_too_large(size: usize, limit: usize) -> Self {
        Self::ValueTooLarge { size, limit }
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable<S: Into<String>>(kind: BackendFailure, message: S) -> Self {
        Self::BackendUnavailable {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend unavailable error with source
    pub fn backend_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        kind: BackendFailure,
        message: S,
        source: E,
    ) -> Self {
        Self::BackendUnavailable {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and infrastructure error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// Classification helpers
impl Error {
    /// Whether this is the expected "not cached" outcome
    pub fn is_cache_miss(&self) -> bool {
        matches!(self, Self::CacheMiss { .. })
    }

    /// Whether this error came from the remote tier
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }

    /// Stable label used for the `error_type` metric dimension
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::CacheMiss { .. } => "miss",
            Self::Serialization { .. } => "serialization",
            Self::ValueTooLarge { .. } => "value_too_large",
            Self::BackendUnavailable { kind, .. } => kind.as_str(),
            Self::PartialInvalidation { .. } => "partial_invalidation",
            Self::Configuration { .. } => "configuration",
            Self::Io { .. } => "io",
            Self::Infrastructure { .. } => "infrastructure",
        }
    }
}
