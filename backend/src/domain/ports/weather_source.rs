//! Port interface for the upstream weather provider.
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CityQuery, WeatherReport};

/// Classified failures from the upstream weather provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherSourceError {
    /// Transport-level failure reaching the provider (connect error, timeout).
    #[error("weather provider unreachable: {message}")]
    Unavailable {
        /// Transport failure detail.
        message: String,
    },
    /// Provider responded with a non-success HTTP status.
    #[error("weather provider returned status {status}")]
    Status {
        /// HTTP status code returned by the provider.
        status: u16,
    },
    /// Provider response did not contain the expected fields or types.
    #[error("weather provider response malformed: {message}")]
    Malformed {
        /// Decode failure detail.
        message: String,
    },
}

impl WeatherSourceError {
    /// Build a [`WeatherSourceError::Unavailable`] from any displayable detail.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Build a [`WeatherSourceError::Status`] from an HTTP status code.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Build a [`WeatherSourceError::Malformed`] from any displayable detail.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Port for fetching current conditions from the upstream provider.
///
/// A single call issues a single request; retries are never performed at
/// this boundary or above it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch and normalise current conditions for a city.
    async fn fetch(&self, city: &CityQuery) -> Result<WeatherReport, WeatherSourceError>;
}
