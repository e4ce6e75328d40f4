//! Validated city identifier shared by the cache and the upstream source.
use thiserror::Error;

/// City name used verbatim as the cache key and the upstream lookup parameter.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace. The raw value is otherwise
///   preserved exactly as received, so the cache key and the echoed
///   `locationName` match the caller's input byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityQuery(String);

impl CityQuery {
    /// Construct a query after validating that it names a city.
    pub fn new(value: impl Into<String>) -> Result<Self, CityQueryValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CityQueryValidationError::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying city name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for CityQuery {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing [`CityQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityQueryValidationError {
    /// City is empty after trimming whitespace.
    #[error("city parameter must not be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    //! Validates city query construction and verbatim preservation.
    use super::{CityQuery, CityQueryValidationError};
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn rejects_blank_cities(#[case] value: &str) {
        let err = CityQuery::new(value).expect_err("blank city rejected");
        assert_eq!(err, CityQueryValidationError::Empty);
    }

    #[rstest]
    fn accepts_and_preserves_city_names() {
        let city = CityQuery::new("Boston").expect("valid city");
        assert_eq!(city.as_str(), "Boston");
        assert_eq!(city.to_string(), "Boston");
    }

    #[rstest]
    fn keeps_surrounding_whitespace_verbatim() {
        // The raw value is the cache key; it is never normalised.
        let city = CityQuery::new(" Boston ").expect("valid city");
        assert_eq!(city.as_str(), " Boston ");
    }
}
