//! Admin gate: shared-secret header plus optional IP allow-list.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use keygate_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the admin shared secret.
const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Rejects requests that are not from an allowed IP (403) or do not
/// present the configured admin key (401).
///
/// The allow-list is skipped when empty. An empty configured admin key
/// rejects everything rather than accepting an empty header.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let admin = &state.config.admin;

    if !admin.allowed_ips.is_empty() {
        let ip = client_ip(&request);
        let allowed = ip
            .as_deref()
            .map(|ip| admin.allowed_ips.iter().any(|allowed| allowed == ip))
            .unwrap_or(false);
        if !allowed {
            warn!(ip = ip.as_deref().unwrap_or("unknown"), "Admin request from blocked IP");
            return Err(AppError::authorization("IP address not allowed").into());
        }
    }

    let presented = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if admin.admin_key.is_empty() || presented != Some(admin.admin_key.as_str()) {
        return Err(AppError::authentication("Unauthorized").into());
    }

    Ok(next.run(request).await)
}

/// Best-effort client IP: the first `X-Forwarded-For` hop when present
/// (the service is expected to sit behind a proxy), else the socket
/// peer address.
fn client_ip(request: &Request) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
}
