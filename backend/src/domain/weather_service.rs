//! Read-through cache orchestration over the weather provider.
//!
//! This module implements the driving port for current-weather lookups:
//! serve from the cache when possible, otherwise fetch upstream once and
//! write the result back. Cache failures never fail a lookup.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CurrentWeather, WeatherCache, WeatherSource};
use crate::domain::{CityQuery, WeatherLookupError};

/// Read-through weather lookup service implementing [`CurrentWeather`].
///
/// Concurrent lookups for the same city are uncoordinated by design: each
/// may miss, fetch, and write independently. The writes carry equivalent
/// data, so last-write-wins is acceptable.
#[derive(Clone)]
pub struct WeatherService<C, S> {
    cache: Arc<C>,
    source: Arc<S>,
}

impl<C, S> WeatherService<C, S> {
    /// Create a new service over the given cache and provider adapters.
    pub fn new(cache: Arc<C>, source: Arc<S>) -> Self {
        Self { cache, source }
    }
}

#[async_trait]
impl<C, S> CurrentWeather for WeatherService<C, S>
where
    C: WeatherCache,
    S: WeatherSource,
{
    async fn resolve(&self, city: &CityQuery) -> Result<String, WeatherLookupError> {
        match self.cache.get(city).await {
            Ok(Some(body)) => {
                debug!(city = %city, "serving cached weather");
                return Ok(body);
            }
            Ok(None) => debug!(city = %city, "weather cache miss"),
            // A store outage degrades to always-fetch rather than failing
            // the request; keep this branch explicit so the conflation of
            // "miss" and "cache unreachable" stays visible.
            Err(error) => {
                warn!(city = %city, %error, "weather cache lookup failed, fetching upstream");
            }
        }

        let report = self.source.fetch(city).await?;
        let body = report
            .to_json()
            .map_err(|error| WeatherLookupError::Serialization {
                message: error.to_string(),
            })?;

        if let Err(error) = self.cache.put(city, &body).await {
            warn!(city = %city, %error, "weather cache write failed, serving uncached result");
        }
        Ok(body)
    }
}
