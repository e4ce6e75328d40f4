//! Normalised weather report returned to callers and stored in the cache.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CityQuery;

/// Current weather conditions for a single city.
///
/// Immutable once constructed. The canonical serialisation produced by
/// [`WeatherReport::to_json`] is both the HTTP response body and the cached
/// value, so a cache hit returns output byte-identical to the original fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    /// Echoes the queried city verbatim, never a provider-supplied name.
    #[schema(example = "Boston")]
    pub location_name: String,
    /// Current temperature formatted to exactly two fraction digits.
    #[schema(example = "72.46")]
    pub temperature: String,
    /// Free-text sky or weather description from the provider.
    #[schema(example = "Clear")]
    pub condition: String,
}

impl WeatherReport {
    /// Build a report from provider data, normalising the temperature format.
    ///
    /// Formatting is locale-independent: two fraction digits, always.
    pub fn new(city: &CityQuery, temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            location_name: city.as_str().to_owned(),
            temperature: format!("{temperature:.2}"),
            condition: condition.into(),
        }
    }

    /// Serialise to the canonical JSON representation used on the wire and
    /// in the cache.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    //! Validates temperature normalisation and the canonical serialisation.
    use super::WeatherReport;
    use crate::domain::CityQuery;
    use rstest::rstest;

    fn city(name: &str) -> CityQuery {
        CityQuery::new(name).expect("valid city")
    }

    #[rstest]
    #[case(72.456, "72.46")]
    #[case(70.0, "70.00")]
    #[case(0.0, "0.00")]
    #[case(-3.456, "-3.46")]
    fn formats_temperature_to_two_fraction_digits(#[case] raw: f64, #[case] expected: &str) {
        let report = WeatherReport::new(&city("Boston"), raw, "Clear");
        assert_eq!(report.temperature, expected);
    }

    #[rstest]
    fn serialises_to_canonical_json() {
        let report = WeatherReport::new(&city("Boston"), 72.456, "Clear");
        let json = report.to_json().expect("serialise");
        assert_eq!(
            json,
            r#"{"locationName":"Boston","temperature":"72.46","condition":"Clear"}"#
        );
    }

    #[rstest]
    fn location_name_echoes_the_query_verbatim() {
        let report = WeatherReport::new(&city(" New York "), 10.0, "Rain");
        assert_eq!(report.location_name, " New York ");
    }
}
