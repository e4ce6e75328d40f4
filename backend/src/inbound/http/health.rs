//! Orchestration probes for the weather proxy.
//!
//! `/health/ready` answers 503 until the server assembly has bound the
//! listener, then 200. `/health/live` only proves the process responds; the
//! proxy holds no in-process state to drain, so liveness carries no flag.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};

/// Readiness flag flipped by the server assembly once the socket is bound.
#[derive(Debug, Default)]
pub struct Readiness(AtomicBool);

impl Readiness {
    /// Start as not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the listener is bound and traffic can be served.
    pub fn mark_ready(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether traffic can be served.
    pub fn is_ready(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

fn probe(probe_ok: bool) -> HttpResponse {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe: 503 until the listener is bound, 200 afterwards.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(readiness: web::Data<Readiness>) -> HttpResponse {
    probe(readiness.is_ready())
}

/// Liveness probe: 200 whenever the process can answer at all.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    probe(true)
}
