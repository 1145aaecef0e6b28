//! agentgate gateway binary.
//!
//! - Policy from `POLICY_PATH` (default `./agent_policy.yaml`); any config
//!   error aborts startup
//! - Listen address from `AGENTGATE_LISTEN` (default `0.0.0.0:8080`)
//! - Log filter from `RUST_LOG`
//! - Graceful shutdown on Ctrl-C

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use agentgate_gateway::{app_state, config, router};

const DEFAULT_POLICY_PATH: &str = "./agent_policy.yaml";
const DEFAULT_LISTEN: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let policy_path = std::env::var("POLICY_PATH").unwrap_or_else(|_| DEFAULT_POLICY_PATH.into());
    let cfg = match config::load_from_file(&policy_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(path = %policy_path, error = %e, "policy load failed");
            return ExitCode::FAILURE;
        }
    };

    let listen_raw = std::env::var("AGENTGATE_LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.into());
    let listen: SocketAddr = match listen_raw.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(listen = %listen_raw, error = %e, "AGENTGATE_LISTEN must be a valid SocketAddr");
            return ExitCode::FAILURE;
        }
    };

    let state = match app_state::AppState::new(&cfg) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "governor init failed");
            return ExitCode::FAILURE;
        }
    };
    let app = router::build_router(state);

    tracing::info!(
        %listen,
        policy = %policy_path,
        modules = cfg.allowed_modules.len(),
        restricted = cfg.restricted_actions.len(),
        "agentgate-gateway starting"
    );
    let listener = match tokio::net::TcpListener::bind(listen).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%listen, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutdown signal received");
    };

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
