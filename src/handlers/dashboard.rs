//! Dashboard overview handler

use axum::{extract::{State, Query}, Json};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppState, AppResult};
use crate::logic::{self, SeverityCounts};
use crate::models::{EventType, LogRecord, LogRecordView, Tone};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct DashboardParams {
    /// Rows per recent list
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub label: &'static str,
    pub tone: Tone,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_events: usize,
    pub activity_events: usize,
    pub security_events: usize,
    pub by_type: Vec<TypeCount>,
    pub severity: SeverityCounts,
    pub recent_activity: Vec<LogRecordView>,
    pub recent_security: Vec<LogRecordView>,
}

/// Overview cards and the two recent-event panels
pub async fn overview(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Json<DashboardResponse>> {
    params.validate()?;

    let limit = params.limit.unwrap_or(state.config.recent_limit);
    let summary = logic::overview(state.store.records(), limit);
    if summary.excluded > 0 {
        tracing::warn!(excluded = summary.excluded, "Malformed log records left out of overview");
    }

    let offset = state.config.display_offset();

    Ok(Json(DashboardResponse {
        total_events: summary.total,
        activity_events: summary.activity,
        security_events: summary.security,
        by_type: summary
            .by_type
            .iter()
            .map(|(event_type, count)| TypeCount {
                event_type: *event_type,
                label: event_type.label(),
                tone: event_type.tone(),
                count: *count,
            })
            .collect(),
        severity: logic::severity_counts(state.store.security_events()),
        recent_activity: views(&summary.recent_activity, offset),
        recent_security: views(&summary.recent_security, offset),
    }))
}

fn views(records: &[&LogRecord], offset: FixedOffset) -> Vec<LogRecordView> {
    records.iter().map(|r| LogRecordView::new(r, offset)).collect()
}
