use axum::{extract::State, Json};
use dataset::DatasetInfo;
use insights::{summary_stats, SummaryStats};

use crate::error::ApiError;
use crate::state::SharedState;

pub async fn get_stats(State(state): State<SharedState>) -> Result<Json<SummaryStats>, ApiError> {
    let ds = state.store.require()?;
    Ok(Json(summary_stats(&ds)))
}

pub async fn get_dataset(State(state): State<SharedState>) -> Result<Json<DatasetInfo>, ApiError> {
    let ds = state.store.require()?;
    Ok(Json(ds.info().clone()))
}
