//! Routes for resolving rolls and drawing raw values.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use fateweaver_core::config::EngineConfig;
use fateweaver_core::{RandomEngine, RangeRequest};
use fateweaver_rules::{MechanicConfig, RollOutcome, RulesError, resolve_roll};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

/// Largest `count` accepted by POST /generate.
pub const MAX_GENERATE_COUNT: usize = 1000;

fn default_count() -> usize {
    1
}

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct RollRequest {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
    /// Added to the natural result.
    #[serde(default)]
    pub modifier: i64,
    /// How draws are combined. Defaults to a single roll.
    #[serde(default)]
    pub mechanic: MechanicConfig,
    /// A fresh engine for this request only. The shared engine is used when
    /// absent.
    #[serde(default)]
    pub engine: Option<EngineConfig>,
}

/// Request body for POST /generate.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
    /// Number of values to draw.
    #[serde(default = "default_count")]
    pub count: usize,
    /// A fresh engine for this request only.
    #[serde(default)]
    pub engine: Option<EngineConfig>,
}

/// Response body for POST /generate.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// The drawn values, in order.
    pub values: Vec<i64>,
}

/// Runs `f` against a per-request engine if one is configured, otherwise
/// against the shared engine.
fn with_engine<T>(
    state: &AppState,
    config: Option<&EngineConfig>,
    f: impl FnOnce(&mut dyn RandomEngine) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Some(config) = config {
        let mut engine = config.build()?;
        return f(&mut *engine);
    }
    let mut engine = state.engine.lock().map_err(|_| ApiError::EnginePoisoned)?;
    f(&mut **engine)
}

/// POST /
#[instrument(skip(state, request), fields(min = request.min, max = request.max))]
async fn roll(
    State(state): State<AppState>,
    Json(request): Json<RollRequest>,
) -> Result<Json<RollOutcome>, ApiError> {
    let range = RangeRequest::from_f64(request.min, request.max).map_err(RulesError::from)?;
    let mechanic = request.mechanic.build()?;

    let outcome = with_engine(&state, request.engine.as_ref(), |engine| {
        Ok(resolve_roll(range, request.modifier, mechanic.as_ref(), engine)?)
    })?;

    info!(
        natural = outcome.natural,
        modified = outcome.modified,
        "handled roll request"
    );

    Ok(Json(outcome))
}

/// POST /generate
#[instrument(skip(state, request), fields(min = request.min, max = request.max, count = request.count))]
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if request.count == 0 || request.count > MAX_GENERATE_COUNT {
        return Err(ApiError::InvalidCount {
            count: request.count,
            max: MAX_GENERATE_COUNT,
        });
    }
    let range = RangeRequest::from_f64(request.min, request.max).map_err(RulesError::from)?;

    let values = with_engine(&state, request.engine.as_ref(), |engine| {
        (0..request.count)
            .map(|_| engine.generate_in(range).map_err(ApiError::from))
            .collect::<Result<Vec<_>, _>>()
    })?;

    info!(drawn = values.len(), "handled generate request");

    Ok(Json(GenerateResponse { values }))
}

/// Returns the rolls router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(roll))
        .route("/generate", post(generate))
}
