//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`WeatherCache`], [`WeatherSource`]) are implemented by
//! outbound adapters; the driving port ([`CurrentWeather`]) is consumed by
//! inbound adapters.

mod current_weather;
mod weather_cache;
mod weather_source;

#[cfg(test)]
pub use current_weather::MockCurrentWeather;
pub use current_weather::CurrentWeather;
#[cfg(test)]
pub use weather_cache::MockWeatherCache;
pub use weather_cache::{WeatherCache, WeatherCacheError};
#[cfg(test)]
pub use weather_source::MockWeatherSource;
pub use weather_source::{WeatherSource, WeatherSourceError};
