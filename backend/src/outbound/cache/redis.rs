//! Redis-backed weather cache adapter.
//!
//! Uses a `bb8-redis` connection pool. Keys are raw city strings; values are
//! the canonical JSON serialisation of a report, written with `SET … EX` so
//! entries expire on their own schedule. Pool acquisition and every command
//! are bounded by a command timeout so a stalled store cannot exhaust the
//! request-handling pool.

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::Pool;
use bb8_redis::redis::AsyncCommands;
use tokio::time::timeout;

use crate::domain::CityQuery;
use crate::domain::ports::{WeatherCache, WeatherCacheError};

/// Weather cache adapter over a pooled Redis connection.
#[derive(Clone, Debug)]
pub struct RedisWeatherCache {
    pool: Pool<RedisConnectionManager>,
    ttl: Duration,
    command_timeout: Duration,
}

impl RedisWeatherCache {
    /// Build the pool for the given store address.
    ///
    /// Connections are established lazily, so an unreachable store surfaces
    /// per command rather than at startup; lookups then degrade to upstream
    /// fetches.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherCacheError::Backend`] when the store address cannot
    /// be parsed or the pool cannot be constructed.
    pub async fn connect(
        url: &str,
        ttl: Duration,
        command_timeout: Duration,
    ) -> Result<Self, WeatherCacheError> {
        let manager = RedisConnectionManager::new(url).map_err(map_backend_error)?;
        let pool = Pool::builder()
            .connection_timeout(command_timeout)
            .build(manager)
            .await
            .map_err(map_backend_error)?;
        Ok(Self {
            pool,
            ttl,
            command_timeout,
        })
    }
}

#[async_trait]
impl WeatherCache for RedisWeatherCache {
    async fn get(&self, city: &CityQuery) -> Result<Option<String>, WeatherCacheError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|error| WeatherCacheError::backend(error.to_string()))?;
        let connection = &mut *conn;
        timeout(
            self.command_timeout,
            connection.get::<_, Option<String>>(city.as_str()),
        )
        .await
        .map_err(|_| WeatherCacheError::backend("redis GET timed out"))?
        .map_err(map_backend_error)
    }

    async fn put(&self, city: &CityQuery, body: &str) -> Result<(), WeatherCacheError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|error| WeatherCacheError::backend(error.to_string()))?;
        let connection = &mut *conn;
        timeout(
            self.command_timeout,
            connection.set_ex::<_, _, ()>(city.as_str(), body, self.ttl.as_secs()),
        )
        .await
        .map_err(|_| WeatherCacheError::backend("redis SET timed out"))?
        .map_err(map_backend_error)
    }
}

fn map_backend_error(error: bb8_redis::redis::RedisError) -> WeatherCacheError {
    WeatherCacheError::backend(error.to_string())
}
