use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sitepeek::SitePeekError;

/// Error body returned by every endpoint: `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    /// Status mapping for page analysis: bad input 400, unreachable site 503.
    pub fn from_analysis(err: SitePeekError) -> Self {
        match err {
            SitePeekError::InvalidInput(_) => Self {
                status: StatusCode::BAD_REQUEST,
                detail: err.to_string(),
            },
            SitePeekError::FetchFailed { .. } => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                detail: format!("Failed to connect to website: {}", err),
            },
            other => Self::internal(format!("Internal server error: {}", other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
