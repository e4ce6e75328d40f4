//! Wire types for the Visual Crossing timeline response.
//!
//! The provider payload is large; only the `currentConditions` object is
//! decoded. Every field is optional at the wire level so absence maps to a
//! recoverable decode error instead of a deserialiser failure with no
//! context.

use serde::Deserialize;

use crate::domain::{CityQuery, WeatherReport};

#[derive(Debug, Deserialize)]
pub(super) struct TimelineResponseDto {
    #[serde(rename = "currentConditions")]
    current_conditions: Option<CurrentConditionsDto>,
}

#[derive(Debug, Deserialize)]
struct CurrentConditionsDto {
    temp: Option<f64>,
    conditions: Option<String>,
}

impl TimelineResponseDto {
    /// Convert the decoded payload into a domain report for the queried city.
    pub(super) fn into_report(self, city: &CityQuery) -> Result<WeatherReport, String> {
        let current = self
            .current_conditions
            .ok_or_else(|| "missing currentConditions object".to_owned())?;
        let temp = current
            .temp
            .ok_or_else(|| "missing currentConditions.temp".to_owned())?;
        let conditions = current
            .conditions
            .ok_or_else(|| "missing currentConditions.conditions".to_owned())?;
        Ok(WeatherReport::new(city, temp, conditions))
    }
}
