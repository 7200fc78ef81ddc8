//! Fateweaver API — HTTP surface over the engine contract and the roll orchestrator.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the full application router.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/rolls", routes::rolls::router())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Builds the shared engine, binds the configured address and serves until
/// the listener fails.
///
/// # Errors
///
/// Returns `AppError` if the engine configuration is rejected, the address
/// is invalid, or binding or serving fails.
pub async fn serve(config: ServerConfig) -> Result<(), AppError> {
    let app_state = config.build_state()?;
    let app = build_router(app_state).layer(CorsLayer::permissive());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
