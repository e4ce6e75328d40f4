//! Domain types and the read-through weather lookup service.
//!
//! Purpose: keep the caching policy and upstream failure taxonomy free of
//! transport concerns. Inbound adapters depend on the driving port in
//! [`ports`]; outbound adapters implement the driven ports.

pub mod city;
pub mod error;
pub mod ports;
pub mod report;
pub mod weather_service;


pub use self::city::{CityQuery, CityQueryValidationError};
pub use self::error::WeatherLookupError;
pub use self::report::WeatherReport;
pub use self::weather_service::WeatherService;
