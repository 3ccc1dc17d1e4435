use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sitepeek::{utils::file_name_from_url, AnalysisResult};
use tracing::{error, info};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UrlPayload {
    pub url: String,
}

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub file_url: String,
}

/// GET /
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "SitePeek API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy"
    }))
}

/// POST /analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<UrlPayload>,
) -> Result<Json<AnalysisResult>, ApiError> {
    info!("Analyzing {}", payload.url);
    let result = state
        .analyzer
        .analyze(&payload.url)
        .await
        .map_err(|e| {
            error!("Analysis of {} failed: {}", payload.url, e);
            ApiError::from_analysis(e)
        })?;
    Ok(Json(result))
}

/// GET /download?file_url=...
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let file = state
        .fetcher
        .get(&query.file_url)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to download file: {}", e)))?;

    let content_type = file.content_type_or_guess(&query.file_url);
    let filename = file_name_from_url(&query.file_url, "file");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        file.body,
    ))
}

/// POST /download-all
pub async fn download_all(
    State(state): State<AppState>,
    Json(payload): Json<UrlPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state
        .archiver
        .build_archive(&payload.url)
        .await
        .map_err(|e| {
            error!("Archive for {} failed: {}", payload.url, e);
            ApiError::internal(format!("Failed to create ZIP: {}", e))
        })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/zip"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=website_assets.zip",
            ),
        ],
        report.bytes,
    ))
}
