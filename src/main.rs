//! Pump Master Server — pump fleet and inspection tracker
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use pumpmaster_core::config::AppConfig;
use pumpmaster_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("PUMPMASTER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
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
    tracing::info!("Starting Pump Master v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = pumpmaster_database::connection::DatabasePool::connect(&config.database).await?;
    pumpmaster_database::migration::run_migrations(db.pool()).await?;

    // ── Repositories ─────────────────────────────────────────────
    let pool = db.pool().clone();
    let user_repo = Arc::new(pumpmaster_database::repositories::user::UserRepository::new(
        pool.clone(),
    ));
    let token_repo = Arc::new(
        pumpmaster_database::repositories::refresh_token::RefreshTokenRepository::new(pool.clone()),
    );
    let pump_repo = Arc::new(pumpmaster_database::repositories::pump::PumpRepository::new(
        pool.clone(),
    ));
    let inspection_repo = Arc::new(
        pumpmaster_database::repositories::inspection::InspectionRepository::new(pool.clone()),
    );

    // ── Auth components ──────────────────────────────────────────
    let password_hasher = Arc::new(pumpmaster_auth::password::PasswordHasher::new());
    let password_validator = Arc::new(pumpmaster_auth::password::PasswordValidator::new(
        &config.auth,
    ));
    let jwt_encoder = Arc::new(pumpmaster_auth::jwt::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(pumpmaster_auth::jwt::JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let auth_service = Arc::new(pumpmaster_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&token_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
        &config.auth,
    ));
    let pump_service = Arc::new(pumpmaster_service::pump::PumpService::new(Arc::clone(
        &pump_repo,
    )));
    let inspection_service = Arc::new(pumpmaster_service::inspection::InspectionService::new(
        Arc::clone(&inspection_repo),
        Arc::clone(&pump_repo),
    ));
    let dashboard_service = Arc::new(pumpmaster_service::dashboard::DashboardService::new(
        Arc::clone(&pump_repo),
        Arc::clone(&inspection_repo),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = pumpmaster_api::state::AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        jwt_decoder,
        auth_service,
        pump_service,
        inspection_service,
        dashboard_service,
    };

    let app = pumpmaster_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Pump Master server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("Pump Master server shut down gracefully");
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
