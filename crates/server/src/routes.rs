//! Estimate API.
//!
//! - `POST /v1/estimate` — four raw product strings in, structured estimate
//!   plus plain-text analysis brief out. Normalization failures map to a
//!   generic 400 body; the specific reason is logged, not leaked.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use packwise_core::reference::ReferenceTableError;
use packwise_core::{
    estimate_with_tables, normalize, BriefRenderer, NormalizedProduct, PackagingResult,
    RawProductInput, ReferenceTables,
};

#[derive(Clone)]
pub struct AppState {
    tables: Arc<ReferenceTables>,
    brief: Arc<BriefRenderer>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("reference table validation failed: {0}")]
    Reference(#[from] ReferenceTableError),
    #[error("brief template failed to compile: {0}")]
    Template(#[from] tera::Error),
}

impl AppState {
    /// Validate the reference tables and compile the brief template once;
    /// requests only read from the shared state.
    pub fn new(tables: ReferenceTables) -> Result<Self, BootstrapError> {
        tables.validate()?;
        let brief = BriefRenderer::new()?;

        Ok(Self { tables: Arc::new(tables), brief: Arc::new(brief) })
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub normalized: NormalizedProduct,
    pub packaging: PackagingResult,
    pub brief: String,
}

#[derive(Debug, Serialize)]
pub struct EstimateError {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/v1/estimate", post(create_estimate)).with_state(state)
}

pub async fn create_estimate(
    State(state): State<AppState>,
    Json(payload): Json<RawProductInput>,
) -> Result<Json<EstimateResponse>, (StatusCode, Json<EstimateError>)> {
    let correlation_id = Uuid::new_v4().to_string();

    let product = match normalize(&payload) {
        Ok(product) => product,
        Err(reason) => {
            warn!(
                event_name = "estimate.rejected",
                correlation_id = %correlation_id,
                reason = %reason,
                "normalization rejected request"
            );
            return Err((
                StatusCode::BAD_REQUEST,
                Json(EstimateError { error: "Invalid input".to_string() }),
            ));
        }
    };

    let packaging = estimate_with_tables(&product, &state.tables);

    let brief = match state.brief.render(&product, &packaging, &state.tables) {
        Ok(brief) => brief,
        Err(reason) => {
            error!(
                event_name = "estimate.brief_failed",
                correlation_id = %correlation_id,
                reason = %reason,
                "brief rendering failed"
            );
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(EstimateError { error: "Internal error".to_string() }),
            ));
        }
    };

    info!(
        event_name = "estimate.calculated",
        correlation_id = %correlation_id,
        quantity = product.quantity,
        box_grade = ?packaging.box_grade,
        unit_cost = packaging.unit_cost,
        total_cost = packaging.total_cost,
        "packaging estimate calculated"
    );

    Ok(Json(EstimateResponse { normalized: product, packaging, brief }))
}
