//! Governance HTTP handlers.
//!
//! Thin adapters over `Governor`; the engine decides, these only translate
//! JSON in and out.
//!
//! - `POST /v1/validate`                 : gate an action
//! - `GET  /v1/rate-limit-status`        : limiter snapshot
//! - `GET  /v1/audit-log`                : rendered audit trail
//! - `POST /v1/governance/override`      : MANUAL_OVERRIDE entry
//! - `POST /v1/governance/approve-action`: APPROVAL_GRANTED / APPROVAL_DENIED entry

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use agentgate_core::decision::ManualTag;
use agentgate_core::error::{ClientCode, GateError};

use crate::app_state::AppState;
use crate::status::RateLimitStatus;

/// Error body: `{"code": "...", "message": "..."}`.
pub struct ApiError(GateError);

impl From<GateError> for ApiError {
    fn from(e: GateError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::Config | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({ "code": code.as_str(), "message": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Malformed or mistyped bodies become a BAD_REQUEST `ApiError`.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(v)| v)
        .map_err(|e| GateError::BadRequest(e.body_text()).into())
}

fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(GateError::BadRequest(format!("{field} must not be empty")).into());
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub action: String,
    pub module: String,
}

pub async fn validate(
    State(state): State<AppState>,
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = json_body(body)?;
    let allowed = state.governor().validate(&req.action, &req.module);
    Ok(Json(json!({ "allowed": allowed })))
}

pub async fn rate_limit_status(State(state): State<AppState>) -> Json<RateLimitStatus> {
    Json(state.governor().status())
}

#[derive(Debug, Default, Deserialize)]
pub struct AuditQuery {
    #[serde(default)]
    pub filter_violations: bool,
}

pub async fn audit_log(
    State(state): State<AppState>,
    Query(q): Query<AuditQuery>,
) -> impl IntoResponse {
    Json(json!({ "audit_log": state.governor().audit_log(q.filter_violations) }))
}

#[derive(Debug, Deserialize)]
pub struct OverrideRequest {
    pub action: String,
    pub module: String,
    pub reason: String,
}

pub async fn governance_override(
    State(state): State<AppState>,
    body: Result<Json<OverrideRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = json_body(body)?;
    require("action", &req.action)?;
    require("module", &req.module)?;

    state
        .governor()
        .append_manual(ManualTag::Override, &req.action, &req.module, Some(&req.reason));
    Ok(Json(json!({ "status": "override_logged" })))
}

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub action: String,
    pub module: String,
    pub approved: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

pub async fn approve_action(
    State(state): State<AppState>,
    body: Result<Json<ApprovalRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = json_body(body)?;
    require("action", &req.action)?;
    require("module", &req.module)?;

    let (tag, status) = if req.approved {
        (ManualTag::ApprovalGranted, "approved")
    } else {
        (ManualTag::ApprovalDenied, "denied")
    };
    state
        .governor()
        .append_manual(tag, &req.action, &req.module, req.reason.as_deref());
    Ok(Json(json!({ "status": status })))
}
