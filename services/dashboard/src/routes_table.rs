use axum::extract::{Query, State};
use axum::Json;
use dataset::DatasetError;
use insights::{data_table, PageRequest, TablePage, DEFAULT_PAGE, DEFAULT_PER_PAGE};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::SharedState;

// Kept as strings so a bad number gets the JSON error shape instead of a
// plain-text query rejection.
#[derive(Deserialize)]
pub struct TableQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sentiment: Option<String>,
}

fn positive_int(name: &str, raw: Option<&str>, default: usize) -> Result<usize, DatasetError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(v) => v
            .parse::<usize>()
            .map_err(|_| DatasetError::validation(format!("{name} must be a positive integer, got {v:?}"))),
    }
}

impl TableQuery {
    pub fn to_request(&self) -> Result<PageRequest, DatasetError> {
        let page = positive_int("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let per_page = positive_int("per_page", self.per_page.as_deref(), DEFAULT_PER_PAGE)?;
        Ok(PageRequest::new(page, per_page)?.with_sentiment(self.sentiment.clone()))
    }
}

pub async fn get_data_table(
    State(state): State<SharedState>,
    Query(q): Query<TableQuery>,
) -> Result<Json<TablePage>, ApiError> {
    let ds = state.store.require()?;
    let req = q.to_request()?;
    Ok(Json(data_table(&ds, &req)))
}
