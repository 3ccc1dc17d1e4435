use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::site_handlers::{analyze, download, download_all, root};
use crate::state::AppState;

pub fn site_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/analyze", post(analyze))
        .route("/download", get(download))
        .route("/download-all", post(download_all))
        .with_state(state)
}
