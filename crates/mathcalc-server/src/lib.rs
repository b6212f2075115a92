//! # mathcalc-server
//!
//! HTTP API over the mathcalc engine. `POST /pow`, `POST /fibonacci` and
//! `POST /factorial` compute one operation and persist it to the audit
//! store; `GET /history` returns the most recent logged computations.
//!
//! Results serialize as decimal strings so arbitrary-precision values
//! survive JSON consumers with fixed-width number types.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use mathcalc_core::{compute, ComputeError, ComputeRequest, Engine, ResultRecord};
use mathcalc_store::{LoggedComputation, Storage};

/// How the response path treats audit-log failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// A failed insert is warned about and the result is still returned.
    BestEffort,
    /// A failed insert fails the request (audit-grade deployments).
    Strict,
}

/// Shared server state.
pub struct AppState {
    /// The memoizing engine; caches are shared across requests.
    pub engine: Engine,
    /// The audit store.
    pub storage: Storage,
    /// Audit-log failure policy.
    pub log_mode: LogMode,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// API error mapped to an HTTP status plus JSON body.
#[derive(Debug)]
enum ApiError {
    /// Bad user input: 400.
    Validation(String),
    /// Engine misuse or store failure in strict mode: 500.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<ComputeError> for ApiError {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::Validation(msg) => Self::Validation(msg),
            ComputeError::Engine(e) => Self::Internal(e.to_string()),
        }
    }
}

/// Run one computation and persist it according to the log mode.
fn run_and_log(state: &AppState, req: &ComputeRequest) -> Result<ResultRecord, ApiError> {
    let record = compute(&state.engine, req)?;
    let persisted = state.storage.log(
        req.op().as_str(),
        &req.params_json(),
        &record.result.to_string(),
    );
    if let Err(err) = persisted {
        match state.log_mode {
            LogMode::Strict => {
                return Err(ApiError::Internal(format!("audit log failed: {err}")));
            }
            LogMode::BestEffort => warn!(%err, "audit log failed; returning result anyway"),
        }
    }
    Ok(record)
}

#[derive(Debug, Deserialize)]
struct PowParams {
    base: i64,
    exponent: i64,
}

#[derive(Debug, Deserialize)]
struct IndexParams {
    n: i64,
}

async fn pow_handler(
    State(state): State<Arc<AppState>>,
    Json(p): Json<PowParams>,
) -> Result<Json<ResultRecord>, ApiError> {
    run_and_log(
        &state,
        &ComputeRequest::Pow {
            base: p.base,
            exponent: p.exponent,
        },
    )
    .map(Json)
}

async fn fibonacci_handler(
    State(state): State<Arc<AppState>>,
    Json(p): Json<IndexParams>,
) -> Result<Json<ResultRecord>, ApiError> {
    run_and_log(&state, &ComputeRequest::Fib { n: p.n }).map(Json)
}

async fn factorial_handler(
    State(state): State<Arc<AppState>>,
    Json(p): Json<IndexParams>,
) -> Result<Json<ResultRecord>, ApiError> {
    run_and_log(&state, &ComputeRequest::Fact { n: p.n }).map(Json)
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    #[serde(default = "default_history_limit")]
    limit: u32,
}

fn default_history_limit() -> u32 {
    10
}

/// Audit row as served by `GET /history`.
#[derive(Debug, Serialize)]
pub struct HistoryRow {
    pub id: i64,
    pub op: String,
    pub params: String,
    pub result: String,
    pub created_at: String,
}

impl From<LoggedComputation> for HistoryRow {
    fn from(row: LoggedComputation) -> Self {
        Self {
            id: row.id,
            op: row.op,
            params: row.params,
            result: row.result,
            created_at: row.created_at,
        }
    }
}

async fn history_handler(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryRow>>, ApiError> {
    let rows = state
        .storage
        .recent(q.limit)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(rows.into_iter().map(HistoryRow::from).collect()))
}

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pow", post(pow_handler))
        .route("/fibonacci", post(fibonacci_handler))
        .route("/factorial", post(factorial_handler))
        .route("/history", get(history_handler))
        .with_state(state)
}
