//! Port interface for the networked key-value weather cache.
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CityQuery;

/// Errors surfaced by the cache adapter.
///
/// Callers treat every variant as non-fatal: a failing lookup falls through
/// to the upstream fetch and a failing write is logged and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherCacheError {
    /// Cache backend is unreachable, timing out, or rejected the command.
    #[error("weather cache backend failure: {message}")]
    Backend {
        /// Backend failure detail.
        message: String,
    },
}

impl WeatherCacheError {
    /// Build a [`WeatherCacheError::Backend`] from any displayable detail.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Port for storing serialised weather reports keyed by city.
///
/// Values are the canonical JSON serialisation of a report; the store is
/// expected to expire entries on its own after the adapter's configured
/// time-to-live. Concurrent writers follow last-write-wins with no
/// coordination.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherCache: Send + Sync {
    /// Read the cached serialised report for a city.
    ///
    /// Returns `Ok(None)` when the key is absent or has expired.
    async fn get(&self, city: &CityQuery) -> Result<Option<String>, WeatherCacheError>;

    /// Store a serialised report under the city key with the configured
    /// expiration, overwriting any previous entry.
    async fn put(&self, city: &CityQuery, body: &str) -> Result<(), WeatherCacheError>;
}
