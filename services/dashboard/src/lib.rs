//! HTTP dashboard over a labelled social-media post dataset.

pub mod config;
pub mod error;
pub mod state;
pub mod routes_pages;
pub mod routes_stats;
pub mod routes_charts;
pub mod routes_table;
pub mod routes_upload;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use dataset::DatasetInfo;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub use config::AppConfig;
pub use error::ApiError;
pub use state::{AppState, SharedState};

pub fn router(state: SharedState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(routes_pages::index))
        .route("/api/stats", get(routes_stats::get_stats))
        .route("/api/dataset", get(routes_stats::get_dataset))
        .route("/api/sentiment-chart", get(routes_charts::get_sentiment_chart))
        .route("/api/platform-chart", get(routes_charts::get_platform_chart))
        .route("/api/timeline-chart", get(routes_charts::get_timeline_chart))
        .route("/api/wordcloud-data", get(routes_charts::get_wordcloud_data))
        .route("/api/model-comparison", get(routes_charts::get_model_comparison))
        .route("/api/data-table", get(routes_table::get_data_table))
        .route("/api/upload", post(routes_upload::post_upload))
        .layer(DefaultBodyLimit::max(upload_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Loads the configured startup dataset if the file exists.
///
/// Failures are logged and leave the store empty; the service still starts.
pub async fn load_default_dataset(state: &SharedState) -> Option<DatasetInfo> {
    let path = state.config.dataset_path.clone();
    if !path.exists() {
        info!(path = %path.display(), "no default dataset; waiting for upload");
        return None;
    }

    let st = state.clone();
    let task_path = path.clone();
    match tokio::task::spawn_blocking(move || st.store.load_file(&task_path)).await {
        Ok(Ok(info)) => {
            info!(path = %path.display(), rows = info.rows, "default dataset loaded");
            Some(info)
        }
        Ok(Err(e)) => {
            warn!(path = %path.display(), error = %e, "default dataset rejected");
            None
        }
        Err(e) => {
            warn!(error = %e, "default dataset load task failed");
            None
        }
    }
}
