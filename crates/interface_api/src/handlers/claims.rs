//! Claims handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use infra_db::{ClaimFilter, ClaimsRepository, DEFAULT_PAGE_SIZE};

use crate::dto::claims::{ClaimResponse, ListClaimsQuery, UpdateStatusRequest};
use crate::{error::ApiError, AppState};

/// Lists claims with pagination, search, and score filters
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<ListClaimsQuery>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let filter = ClaimFilter {
        skip: params.skip.unwrap_or(0).max(0),
        limit: params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0),
        search: params.search.filter(|s| !s.is_empty()),
        min_score: params.min_score,
        max_score: params.max_score,
    };

    let repo = ClaimsRepository::new(state.pool.clone());
    let records = repo.list(&filter).await?;

    Ok(Json(records.into_iter().map(ClaimResponse::from).collect()))
}

/// Updates a claim's review status
///
/// 404 when the claim id is unknown; unrecognized status labels are already
/// rejected by the request body deserializer.
pub async fn update_status(
    State(state): State<AppState>,
    Path(claim_id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let repo = ClaimsRepository::new(state.pool.clone());
    let record = repo.update_status(&claim_id, request.status).await?;

    Ok(Json(ClaimResponse::from(record)))
}
