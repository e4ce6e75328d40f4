//! Driving port for current-weather lookups.
//!
//! Inbound adapters (HTTP handlers) use this port so they depend only on the
//! lookup contract, not on the cache or provider adapters behind it.
use async_trait::async_trait;

use crate::domain::{CityQuery, WeatherLookupError};

/// Domain use-case port resolving a city to a serialised weather report.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrentWeather: Send + Sync {
    /// Resolve current conditions for a city, serving from cache when
    /// possible.
    ///
    /// The returned string is the canonical JSON serialisation of a
    /// [`crate::domain::WeatherReport`]; on a cache hit it is the exact
    /// bytes previously stored.
    async fn resolve(&self, city: &CityQuery) -> Result<String, WeatherLookupError>;
}
