//! Fateweaver API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fateweaver_core::EngineError;
use fateweaver_core::error::ConfigError;
use fateweaver_rules::RulesError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configured engine could not be built.
    #[error("engine configuration error: {0}")]
    Engine(#[from] ConfigError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Errors a request handler can return; each maps to one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The roll could not be resolved.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// A per-request engine configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `count` was outside the accepted bounds.
    #[error("count must be between 1 and {max}, got {count}")]
    InvalidCount {
        /// The requested count.
        count: usize,
        /// The largest accepted count.
        max: usize,
    },

    /// A previous request panicked while holding the shared engine.
    #[error("shared engine is unavailable")]
    EnginePoisoned,
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self::Rules(RulesError::Engine(err))
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Rules(RulesError::Engine(EngineError::InternalConsistency { .. })) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_consistency_error",
            ),
            Self::Rules(RulesError::TooManyRolls { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "too_many_rolls")
            }
            Self::Rules(_) | Self::InvalidCount { .. } => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            Self::Config(_) => (StatusCode::BAD_REQUEST, "invalid_engine_config"),
            Self::EnginePoisoned => (StatusCode::INTERNAL_SERVER_ERROR, "engine_unavailable"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
