//! Key-value cache adapters.

mod redis;

pub use redis::RedisWeatherCache;
