//! Process configuration loaded once at startup.
//!
//! Loaded from the environment and passed explicitly into adapter and
//! service constructors; never reloaded, never ambient. Parsing is factored
//! over an injectable lookup so it is testable without mutating the process
//! environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const API_KEY_VAR: &str = "WEATHER_API_KEY";
const BASE_URL_VAR: &str = "WEATHER_API_BASE_URL";
const REDIS_URL_VAR: &str = "REDIS_URL";
const CACHE_TTL_VAR: &str = "CACHE_EXPIRATION_SECONDS";
const UPSTREAM_TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECONDS";
const CACHE_TIMEOUT_VAR: &str = "CACHE_TIMEOUT_SECONDS";
const BIND_ADDR_VAR: &str = "BIND_ADDR";

const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";
const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;
const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_CACHE_TIMEOUT_SECONDS: u64 = 2;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Application configuration shared by the server assembly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the provider timeline endpoint.
    pub provider_base_url: Url,
    /// Credential sent to the provider as the `key` query parameter.
    pub provider_api_key: String,
    /// Address of the key-value cache store.
    pub redis_url: String,
    /// Expiration applied to every cache entry, at least one second.
    pub cache_ttl: Duration,
    /// Bound on a single provider request.
    pub upstream_timeout: Duration,
    /// Bound on a single cache command, pool acquisition included.
    pub cache_timeout: Duration,
}

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("missing required environment variable {name}")]
    MissingVar {
        /// Variable name.
        name: &'static str,
    },
    /// A variable is present but unparseable.
    #[error("invalid value for {name}: {message}")]
    InvalidVar {
        /// Variable name.
        name: &'static str,
        /// Parse failure detail.
        message: String,
    },
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the provider credential is missing or
    /// any variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the provider credential is missing or
    /// any variable fails to parse.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let provider_api_key = lookup(API_KEY_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingVar { name: API_KEY_VAR })?;

        let provider_base_url = parse_or_default(&lookup, BASE_URL_VAR, DEFAULT_BASE_URL, |raw| {
            Url::parse(raw).map_err(|error| error.to_string())
        })?;
        let bind_addr = parse_or_default(&lookup, BIND_ADDR_VAR, DEFAULT_BIND_ADDR, |raw| {
            raw.parse::<SocketAddr>().map_err(|error| error.to_string())
        })?;
        let redis_url = lookup(REDIS_URL_VAR).unwrap_or_else(|| DEFAULT_REDIS_URL.to_owned());

        let cache_ttl = duration_var(&lookup, CACHE_TTL_VAR, DEFAULT_CACHE_TTL_SECONDS)?;
        // Redis rejects SET with a zero expiration, so every write would fail.
        if cache_ttl.is_zero() {
            return Err(ConfigError::InvalidVar {
                name: CACHE_TTL_VAR,
                message: "expiration must be at least one second".to_owned(),
            });
        }
        let upstream_timeout =
            duration_var(&lookup, UPSTREAM_TIMEOUT_VAR, DEFAULT_UPSTREAM_TIMEOUT_SECONDS)?;
        let cache_timeout = duration_var(&lookup, CACHE_TIMEOUT_VAR, DEFAULT_CACHE_TIMEOUT_SECONDS)?;

        Ok(Self {
            bind_addr,
            provider_base_url,
            provider_api_key,
            redis_url,
            cache_ttl,
            upstream_timeout,
            cache_timeout,
        })
    }
}

fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let raw = lookup(name).unwrap_or_else(|| default.to_owned());
    parse(&raw).map_err(|message| ConfigError::InvalidVar { name, message })
}

fn duration_var(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default_seconds: u64,
) -> Result<Duration, ConfigError> {
    let seconds = match lookup(name) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|error| ConfigError::InvalidVar {
                name,
                message: error.to_string(),
            })?,
        None => default_seconds,
    };
    Ok(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    //! Configuration parsing against injected variable maps.
    use std::collections::HashMap;

    use super::*;
    use rstest::rstest;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[rstest]
    fn applies_defaults_when_only_the_credential_is_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("WEATHER_API_KEY", "secret")])).expect("config");
        assert_eq!(config.provider_api_key, "secret");
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.upstream_timeout, Duration::from_secs(10));
        assert_eq!(config.cache_timeout, Duration::from_secs(2));
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(
            config
                .provider_base_url
                .as_str()
                .contains("visualcrossing.com")
        );
    }

    #[rstest]
    fn rejects_a_missing_credential() {
        let error = AppConfig::from_lookup(lookup_from(&[])).expect_err("missing key");
        assert_eq!(
            error,
            ConfigError::MissingVar {
                name: "WEATHER_API_KEY"
            }
        );
    }

    #[rstest]
    fn rejects_a_blank_credential() {
        let error = AppConfig::from_lookup(lookup_from(&[("WEATHER_API_KEY", "   ")]))
            .expect_err("blank key");
        assert!(matches!(error, ConfigError::MissingVar { .. }));
    }

    #[rstest]
    #[case("CACHE_EXPIRATION_SECONDS", "ten")]
    #[case("BIND_ADDR", "not-an-addr")]
    #[case("WEATHER_API_BASE_URL", "::not a url::")]
    fn rejects_unparseable_values(#[case] name: &'static str, #[case] value: &str) {
        let error = AppConfig::from_lookup(lookup_from(&[
            ("WEATHER_API_KEY", "secret"),
            (name, value),
        ]))
        .expect_err("invalid value");
        assert!(matches!(error, ConfigError::InvalidVar { .. }));
    }

    #[rstest]
    fn rejects_a_zero_cache_expiration() {
        let error = AppConfig::from_lookup(lookup_from(&[
            ("WEATHER_API_KEY", "secret"),
            ("CACHE_EXPIRATION_SECONDS", "0"),
        ]))
        .expect_err("zero expiration");
        assert_eq!(
            error,
            ConfigError::InvalidVar {
                name: "CACHE_EXPIRATION_SECONDS",
                message: "expiration must be at least one second".to_owned(),
            }
        );
    }

    #[rstest]
    fn honours_explicit_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("WEATHER_API_KEY", "secret"),
            ("REDIS_URL", "redis://cache.internal:6380"),
            ("CACHE_EXPIRATION_SECONDS", "60"),
            ("BIND_ADDR", "127.0.0.1:9090"),
        ]))
        .expect("config");
        assert_eq!(config.redis_url, "redis://cache.internal:6380");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.bind_addr.port(), 9090);
    }
}
