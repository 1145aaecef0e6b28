//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/validate", post(api::validate))
        .route("/v1/rate-limit-status", get(api::rate_limit_status))
        .route("/v1/audit-log", get(api::audit_log))
        .route("/v1/governance/override", post(api::governance_override))
        .route("/v1/governance/approve-action", post(api::approve_action))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
