//! OpenAPI document assembly.
use utoipa::OpenApi;

use crate::domain::WeatherReport;

/// Public OpenAPI surface served in debug builds.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::weather::current_weather,
        crate::inbound::http::health::live,
        crate::inbound::http::health::ready,
    ),
    components(schemas(WeatherReport)),
    tags(
        (name = "weather", description = "Cached current-weather lookups"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
