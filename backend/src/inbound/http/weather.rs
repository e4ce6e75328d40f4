//! Weather lookup HTTP handler.
//!
//! ```text
//! GET /weather/{city}
//! ```
//!
//! Response contract: 200 with the canonical JSON report on success, 400
//! plain text when the city segment is blank, 500 plain text with the
//! failure detail for any upstream or decode error. Cache failures never
//! reach this layer.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};
use tracing::error;

use crate::domain::CityQuery;
use crate::inbound::http::state::HttpState;

/// Resolve current weather for a city, serving cached bytes when available.
#[utoipa::path(
    get,
    path = "/weather/{city}",
    tags = ["weather"],
    params(
        ("city" = String, Path, description = "City name, used verbatim as the cache key")
    ),
    responses(
        (status = 200, description = "Current weather for the city", body = crate::domain::WeatherReport),
        (status = 400, description = "City parameter is required"),
        (status = 500, description = "Upstream fetch or decode failed")
    )
)]
// Single path segment; the empty match lands here so the 400 contract
// applies instead of a bare 404.
#[get("/weather/{city:[^/]*}")]
pub async fn current_weather(
    path: web::Path<String>,
    state: web::Data<HttpState>,
) -> HttpResponse {
    let city = match CityQuery::new(path.into_inner()) {
        Ok(city) => city,
        Err(_) => {
            return HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body("City parameter is required");
        }
    };

    match state.weather.resolve(&city).await {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(lookup_error) => {
            error!(city = %city, error = %lookup_error, "weather lookup failed");
            HttpResponse::InternalServerError()
                .content_type(ContentType::plaintext())
                .body(format!("Error fetching weather data: {lookup_error}"))
        }
    }
}
