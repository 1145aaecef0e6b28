//! Shared error type across agentgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Policy configuration missing, malformed or incomplete.
    Config,
    /// Invalid input / malformed request.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, GateError>;

/// Unified error type used by core and gateway.
///
/// Policy denials are not errors: `validate` reports them as `false`
/// together with a VIOLATION audit entry.
#[derive(Debug, Error)]
pub enum GateError {
    /// Fatal at startup; the engine never serves with a partial policy.
    #[error("config error: {0}")]
    Config(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl GateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            GateError::Config(_) => ClientCode::Config,
            GateError::BadRequest(_) => ClientCode::BadRequest,
            GateError::Internal(_) => ClientCode::Internal,
        }
    }
}
