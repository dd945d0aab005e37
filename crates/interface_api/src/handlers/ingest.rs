//! CSV upload and background ingestion handler

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::dto::stats::IngestAccepted;
use crate::{error::ApiError, AppState};

/// Accepts a multipart CSV upload and triggers background ingestion.
///
/// The upload is written to the configured upload directory, ingestion is
/// spawned as a detached task, and the request returns immediately. Failures
/// after this acknowledgement surface only in the logs; the store keeps its
/// previous contents when a run fails.
pub async fn upload_claims(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IngestAccepted>, ApiError> {
    let mut payload: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            payload = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            );
            break;
        }
    }

    let payload = payload
        .ok_or_else(|| ApiError::BadRequest("multipart field 'file' is required".to_string()))?;

    let dest = state.config.upload_path();
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
    }
    tokio::fs::write(&dest, &payload)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(path = %dest.display(), bytes = payload.len(), "Upload stored, starting ingestion");

    let pool = state.pool.clone();
    tokio::spawn(async move {
        match ingest_pipeline::ingest_file(&pool, &dest).await {
            Ok(report) => {
                tracing::info!(rows = report.rows_loaded, "Background ingestion complete")
            }
            Err(err) => tracing::error!(error = %err, "Background ingestion failed"),
        }
    });

    Ok(Json(IngestAccepted {
        message: "File uploaded and ingestion started".to_string(),
    }))
}
