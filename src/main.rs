//! Keygate Server — license issuance gated on verified on-chain payments.
//!
//! Main entry point that wires all crates together and starts the server.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use keygate_core::config::AppConfig;
use keygate_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("KEYGATE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Keygate v{}", env!("CARGO_PKG_VERSION"));

    if config.admin.admin_key.is_empty() {
        tracing::warn!("No admin key configured; /create will reject every request");
    }
    if config.chain.payee_address.is_empty() {
        return Err(AppError::configuration(
            "chain.payee_address must be configured",
        ));
    }

    // ── Step 1: Initialize record store ──────────────────────────
    tracing::info!(provider = %config.store.provider, "Initializing record store...");
    let store = Arc::new(keygate_store::provider::StoreManager::new(&config.store).await?);
    tracing::info!("Record store initialized");

    // ── Step 2: Initialize payment verification ──────────────────
    let ledger = Arc::new(keygate_chain::client::TronGridClient::new(&config.chain)?);
    let verifier = Arc::new(keygate_chain::verifier::PaymentVerifier::new(
        ledger,
        &config.chain,
    ));

    // ── Step 3: Initialize services ──────────────────────────────
    let licenses = Arc::new(keygate_service::license::service::LicenseService::new(
        store.provider(),
    ));
    let guard = Arc::new(keygate_service::idempotency::IdempotencyGuard::new(
        store.provider(),
    ));
    let purchases = Arc::new(keygate_service::purchase::service::PurchaseService::new(
        verifier,
        Arc::clone(&licenses),
        guard,
    ));
    tracing::info!("Services initialized");

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = keygate_api::state::AppState {
        config: Arc::new(config.clone()),
        store,
        licenses,
        purchases,
    };

    let app = keygate_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Keygate server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Keygate server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
