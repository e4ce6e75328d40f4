//! Reqwest-backed Visual Crossing source adapter.
//!
//! This adapter owns transport details only: request construction with the
//! provider credential, bounded timeout, HTTP status mapping, and JSON
//! decoding into the domain report.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::dto::TimelineResponseDto;
use crate::domain::ports::{WeatherSource, WeatherSourceError};
use crate::domain::{CityQuery, WeatherReport};

/// Weather source adapter issuing GET requests against the timeline endpoint.
///
/// Requests follow `{base}/{city}?key={credential}` with the city taken
/// verbatim from the query and percent-encoded as a path segment.
pub struct VisualCrossingSource {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl VisualCrossingSource {
    /// Build an adapter using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, api_key: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn request_url(&self, city: &CityQuery) -> Result<Url, WeatherSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                WeatherSourceError::unavailable("provider base URL cannot carry path segments")
            })?
            .pop_if_empty()
            .push(city.as_str());
        Ok(url)
    }
}

#[async_trait]
impl WeatherSource for VisualCrossingSource {
    async fn fetch(&self, city: &CityQuery) -> Result<WeatherReport, WeatherSourceError> {
        let url = self.request_url(city)?;
        let response = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherSourceError::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_report(body.as_ref(), city)
    }
}

fn parse_report(body: &[u8], city: &CityQuery) -> Result<WeatherReport, WeatherSourceError> {
    let decoded: TimelineResponseDto = serde_json::from_slice(body).map_err(|error| {
        WeatherSourceError::malformed(format!("invalid provider JSON payload: {error}"))
    })?;
    decoded.into_report(city).map_err(WeatherSourceError::malformed)
}

fn map_transport_error(error: reqwest::Error) -> WeatherSourceError {
    WeatherSourceError::unavailable(error.to_string())
}

#[cfg(test)]
mod tests {
    //! Coverage for request construction, decoding, and failure mapping.

    use super::*;
    use rstest::rstest;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BOSTON_BODY: &str = r#"{"currentConditions":{"temp":72.456,"conditions":"Clear"}}"#;

    fn city(name: &str) -> CityQuery {
        CityQuery::new(name).expect("valid city")
    }

    fn source_for(base: &str) -> VisualCrossingSource {
        let base_url = Url::parse(base).expect("base url");
        VisualCrossingSource::new(base_url, "test-key".to_owned(), Duration::from_secs(2))
            .expect("client")
    }

    #[test]
    fn request_url_appends_city_as_path_segment() {
        let source = source_for("https://weather.invalid/rest/services/timeline");
        let url = source.request_url(&city("Boston")).expect("url");
        assert_eq!(url.path(), "/rest/services/timeline/Boston");
    }

    #[test]
    fn request_url_percent_encodes_the_city() {
        let source = source_for("https://weather.invalid/timeline");
        let url = source.request_url(&city("New York")).expect("url");
        assert_eq!(url.path(), "/timeline/New%20York");
    }

    #[test]
    fn parses_current_conditions_into_report() {
        let report = parse_report(BOSTON_BODY.as_bytes(), &city("Boston")).expect("decode");
        assert_eq!(report.location_name, "Boston");
        assert_eq!(report.temperature, "72.46");
        assert_eq!(report.condition, "Clear");
    }

    #[rstest]
    #[case::missing_object(r#"{"days":[]}"#)]
    #[case::missing_temp(r#"{"currentConditions":{"conditions":"Clear"}}"#)]
    #[case::missing_conditions(r#"{"currentConditions":{"temp":72.456}}"#)]
    #[case::wrong_temp_type(r#"{"currentConditions":{"temp":"72","conditions":"Clear"}}"#)]
    #[case::not_json("backend unavailable")]
    fn maps_unexpected_payloads_to_malformed(#[case] body: &str) {
        let error = parse_report(body.as_bytes(), &city("Boston")).expect_err("decode fails");
        assert!(
            matches!(error, WeatherSourceError::Malformed { .. }),
            "unexpected payloads must map to Malformed, got {error:?}"
        );
    }

    #[tokio::test]
    async fn fetches_and_normalises_current_conditions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timeline/Boston"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(BOSTON_BODY, "application/json"))
            .mount(&server)
            .await;

        let source = source_for(&format!("{}/timeline", server.uri()));
        let report = source.fetch(&city("Boston")).await.expect("fetch");
        assert_eq!(report.location_name, "Boston");
        assert_eq!(report.temperature, "72.46");
        assert_eq!(report.condition, "Clear");
    }

    #[tokio::test]
    async fn maps_provider_status_to_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = source_for(&format!("{}/timeline", server.uri()));
        let error = source.fetch(&city("Atlantis")).await.expect_err("fetch fails");
        assert_eq!(error, WeatherSourceError::status(404));
    }

    #[tokio::test]
    async fn maps_connection_failure_to_unavailable() {
        // Bind then drop a listener so the port is known to refuse.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            listener.local_addr().expect("local addr").port()
        };

        let source = source_for(&format!("http://127.0.0.1:{port}/timeline"));
        let error = source.fetch(&city("Boston")).await.expect_err("fetch fails");
        assert!(
            matches!(error, WeatherSourceError::Unavailable { .. }),
            "transport failures must map to Unavailable, got {error:?}"
        );
    }
}
