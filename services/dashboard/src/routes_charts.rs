use axum::extract::{Query, State};
use axum::Json;
use insights::{
    model_comparison, platform_chart, sentiment_chart, timeline_chart, word_frequency, ChartData, ModelComparison,
    WordFrequency, DEFAULT_SENTIMENT,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::SharedState;

pub async fn get_sentiment_chart(State(state): State<SharedState>) -> Result<Json<ChartData>, ApiError> {
    let ds = state.store.require()?;
    Ok(Json(sentiment_chart(&ds)))
}

pub async fn get_platform_chart(State(state): State<SharedState>) -> Result<Json<ChartData>, ApiError> {
    let ds = state.store.require()?;
    Ok(Json(platform_chart(&ds)))
}

pub async fn get_timeline_chart(State(state): State<SharedState>) -> Result<Json<ChartData>, ApiError> {
    let ds = state.store.require()?;
    Ok(Json(timeline_chart(&ds)?))
}

#[derive(Deserialize)]
pub struct WordsQuery {
    pub sentiment: Option<String>,
}

impl WordsQuery {
    /// Absent or blank means the default label; unlabelled rows are never matched.
    pub fn sentiment(&self) -> &str {
        self.sentiment
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_SENTIMENT)
    }
}

pub async fn get_wordcloud_data(
    State(state): State<SharedState>,
    Query(q): Query<WordsQuery>,
) -> Result<Json<WordFrequency>, ApiError> {
    let ds = state.store.require()?;
    Ok(Json(word_frequency(&ds, q.sentiment())))
}

// Static reference numbers; served with or without a dataset.
pub async fn get_model_comparison() -> Json<ModelComparison> {
    Json(model_comparison())
}
