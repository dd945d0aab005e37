//! Summary stats and score distribution handlers

use axum::{extract::State, Json};

use infra_db::ClaimsRepository;

use crate::dto::stats::{DistributionResponse, StatsResponse};
use crate::{error::ApiError, AppState};

/// Returns the dashboard summary statistics
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());
    let stats = repo.stats().await?;

    Ok(Json(StatsResponse::from(stats)))
}

/// Returns the low/medium/high score-band distribution
pub async fn get_distribution(
    State(state): State<AppState>,
) -> Result<Json<DistributionResponse>, ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());
    let dist = repo.score_distribution().await?;

    Ok(Json(DistributionResponse::from(dist)))
}
