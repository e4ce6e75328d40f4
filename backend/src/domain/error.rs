//! Failure taxonomy for a weather lookup.
//!
//! Cache failures never appear here: the read path degrades to an upstream
//! fetch and the write path is logged and ignored, so only upstream and
//! serialisation failures are ever user visible.
use thiserror::Error;

use super::ports::WeatherSourceError;

/// Errors surfaced by [`crate::domain::WeatherService::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherLookupError {
    /// The upstream provider failed; carries the classified source error.
    #[error(transparent)]
    Source(#[from] WeatherSourceError),
    /// The fetched report could not be serialised for the caller and cache.
    #[error("weather report serialisation failed: {message}")]
    Serialization {
        /// Serialiser failure detail.
        message: String,
    },
}
