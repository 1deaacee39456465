//! Combined log list handler

use axum::{extract::{State, Query}, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::logic::{self, CategoryFilter, LogQuery};
use crate::models::{DayGroupView, LogRecordView};

/// Message shown in place of an empty list
pub const NO_LOGS_MESSAGE: &str = "No logs found for the current filters.";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LogsParams {
    /// all, activity or security
    #[validate(length(max = 32))]
    pub category: Option<String>,

    /// Search box contents
    pub q: Option<String>,

    /// Request sequence token, echoed back untouched
    pub seq: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct LogsResponse {
    pub category: CategoryFilter,
    pub groups: Vec<DayGroupView>,
    pub total: usize,
    pub excluded: usize,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

/// Filter, search and group the log collection
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LogsParams>,
) -> AppResult<Json<LogsResponse>> {
    params.validate()?;
    super::check_search_len(params.q.as_deref(), state.config.max_search_len)?;

    let category: CategoryFilter = params.category.as_deref().unwrap_or_default().parse()?;
    let offset = state.config.display_offset();
    let query = LogQuery::new(category, params.q.as_deref().unwrap_or_default())
        .with_day_offset(offset);

    let result = logic::run(state.store.records(), &query);

    if result.excluded > 0 {
        tracing::warn!(excluded = result.excluded, "Malformed log records left out of results");
    }
    tracing::debug!(
        %category,
        total = result.total,
        groups = result.groups.len(),
        "Log query served"
    );

    let groups = result
        .groups
        .iter()
        .map(|group| DayGroupView {
            day: group.day.clone(),
            records: group.records.iter().map(|r| LogRecordView::new(r, offset)).collect(),
        })
        .collect();

    let empty = result.is_empty();
    Ok(Json(LogsResponse {
        category,
        groups,
        total: result.total,
        excluded: result.excluded,
        empty,
        message: empty.then_some(NO_LOGS_MESSAGE),
        seq: params.seq,
    }))
}
