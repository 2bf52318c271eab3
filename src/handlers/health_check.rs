//! # Health Check Handler
//!
//! Lets load balancers and the integration harness verify that the server
//! is accepting requests.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Health check endpoint that returns 200 OK with an empty body.
///
/// It never touches the recipe store.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
