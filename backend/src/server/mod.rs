//! Server construction and middleware wiring.

mod config;

pub use config::{AppConfig, ConfigError};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::WeatherService;
use crate::domain::ports::CurrentWeather;
use crate::inbound::http::health::{Readiness, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::weather::current_weather;
use crate::middleware::RequestLog;
use crate::outbound::cache::RedisWeatherCache;
use crate::outbound::visual_crossing::VisualCrossingSource;
#[cfg(debug_assertions)]
use utoipa::OpenApi;

/// Construct an Actix HTTP server with all adapters wired.
///
/// Builds the cache pool and the provider client from `config`, composes the
/// read-through lookup service over them, and binds the listener. Readiness
/// flips once the socket is bound.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when an adapter cannot be constructed or
/// the socket cannot be bound.
pub async fn create_server(config: AppConfig) -> std::io::Result<Server> {
    let cache =
        RedisWeatherCache::connect(&config.redis_url, config.cache_ttl, config.cache_timeout)
            .await
            .map_err(|error| {
                std::io::Error::other(format!("weather cache initialisation failed: {error}"))
            })?;
    let source = VisualCrossingSource::new(
        config.provider_base_url.clone(),
        config.provider_api_key.clone(),
        config.upstream_timeout,
    )
    .map_err(|error| {
        std::io::Error::other(format!("provider client initialisation failed: {error}"))
    })?;

    let weather: Arc<dyn CurrentWeather> =
        Arc::new(WeatherService::new(Arc::new(cache), Arc::new(source)));
    let http_state = web::Data::new(HttpState::new(weather));
    let readiness = web::Data::new(Readiness::new());

    let app_readiness = readiness.clone();
    let server = HttpServer::new(move || build_app(app_readiness.clone(), http_state.clone()))
        .bind(config.bind_addr)?
        .run();

    readiness.mark_ready();
    Ok(server)
}

fn build_app(
    readiness: web::Data<Readiness>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(readiness)
        .app_data(http_state)
        .wrap(RequestLog)
        .service(current_weather)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route("/api-docs/openapi.json", web::get().to(openapi_json));

    app
}

#[cfg(debug_assertions)]
async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}
