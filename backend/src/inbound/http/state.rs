//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::CurrentWeather;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-through weather lookup use-case.
    pub weather: Arc<dyn CurrentWeather>,
}

impl HttpState {
    /// Construct state over a weather lookup implementation.
    pub fn new(weather: Arc<dyn CurrentWeather>) -> Self {
        Self { weather }
    }
}
