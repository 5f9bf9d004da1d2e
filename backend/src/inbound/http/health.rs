//! Orchestrator health checks over the service lifecycle.
//!
//! The service moves through three phases: starting, serving, draining.
//! `/health/ready` answers 200 only while serving. `/health/live` answers 200
//! until draining begins, so a shutdown is visible before the listener closes.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

const STARTING: u8 = 0;
const SERVING: u8 = 1;
const DRAINING: u8 = 2;

/// Lifecycle phase shared between the server and its health handlers.
///
/// Phases only move forward; draining is terminal.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(STARTING),
        }
    }
}

impl HealthState {
    /// Start in the starting phase: alive, not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the serving phase once the store is verified and the listener
    /// is bound. No effect after draining has begun.
    pub fn mark_ready(&self) {
        let _ = self
            .phase
            .compare_exchange(STARTING, SERVING, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Enter the draining phase. Both checks fail from here on.
    pub fn begin_draining(&self) {
        self.phase.store(DRAINING, Ordering::Release);
    }

    /// True only while serving.
    pub fn is_ready(&self) -> bool {
        self.phase.load(Ordering::Acquire) == SERVING
    }

    pub fn is_alive(&self) -> bool {
        self.phase.load(Ordering::Acquire) != DRAINING
    }
}

fn health_response(ok: bool) -> HttpResponse {
    let mut response = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness check: 200 while serving employee traffic, 503 while starting
/// or draining.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Serving employee requests"),
        (status = 503, description = "Starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_ready())
}

/// Liveness check: 503 once a shutdown signal has started the drain.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Process is running"),
        (status = 503, description = "Draining before exit")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    health_response(state.is_alive())
}
