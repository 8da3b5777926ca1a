//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use keygate_core::config::AppConfig;
use keygate_service::license::service::LicenseService;
use keygate_service::purchase::service::PurchaseService;
use keygate_store::provider::StoreManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Record store (Redis or in-memory)
    pub store: Arc<StoreManager>,

    // ── Services ─────────────────────────────────────────────
    /// License lifecycle service
    pub licenses: Arc<LicenseService>,
    /// Purchase/extension orchestration
    pub purchases: Arc<PurchaseService>,
}
