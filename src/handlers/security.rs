//! Security event table handler

use axum::{extract::{State, Query}, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::logic::{self, SearchText, SeverityCounts};
use crate::models::{SecurityEventView, Severity};

pub const NO_EVENTS_MESSAGE: &str = "No security events match the current filters.";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SecurityParams {
    pub q: Option<String>,

    /// low, medium or high
    #[validate(length(max = 16))]
    pub severity: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SecurityEventsResponse {
    pub events: Vec<SecurityEventView>,
    pub counts: SeverityCounts,
    pub total: usize,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// List security events
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SecurityParams>,
) -> AppResult<Json<SecurityEventsResponse>> {
    params.validate()?;
    super::check_search_len(params.q.as_deref(), state.config.max_search_len)?;

    let severity = match params.severity.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(raw.parse::<Severity>()?),
    };
    let search = SearchText::new(params.q.as_deref().unwrap_or_default());

    let matched = logic::filter_events(state.store.security_events(), &search, severity);
    let counts = logic::severity_counts(matched.iter().copied());

    let offset = state.config.display_offset();
    let events: Vec<SecurityEventView> = matched
        .iter()
        .map(|e| SecurityEventView::new(e, offset))
        .collect();

    let empty = events.is_empty();
    Ok(Json(SecurityEventsResponse {
        events,
        total: counts.total(),
        counts,
        empty,
        message: empty.then_some(NO_EVENTS_MESSAGE),
    }))
}
