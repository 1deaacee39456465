//! Display projections sent to the dashboard

use chrono::FixedOffset;
use serde::Serialize;

use super::log::{Category, EventType, LogRecord, Tone};
use super::security::{SecurityEvent, Severity};

/// A log row with its label, tone and formatted time resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecordView {
    pub id: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub label: &'static str,
    pub tone: Tone,
    pub actor: String,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_system: Option<String>,
    pub time: String,
}

impl LogRecordView {
    pub fn new(record: &LogRecord, offset: FixedOffset) -> Self {
        Self {
            id: record.id.clone(),
            category: record.category,
            event_type: record.event_type,
            label: record.event_type.label(),
            tone: record.event_type.tone(),
            actor: record.actor.clone(),
            detail: record.detail.clone(),
            origin: record.origin.clone(),
            source_system: record.source_system.clone(),
            time: record.timestamp.clock(offset),
        }
    }
}

/// Date separator and the rows under it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroupView {
    pub day: String,
    pub records: Vec<LogRecordView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityEventView {
    pub id: u32,
    pub event: String,
    pub severity: Severity,
    pub source: String,
    pub ip: String,
    pub timestamp: String,
    pub details: String,
}

impl SecurityEventView {
    pub fn new(event: &SecurityEvent, offset: FixedOffset) -> Self {
        let timestamp = match event.timestamp.instant() {
            Some(at) => at.with_timezone(&offset).format("%Y-%m-%d %H:%M:%S").to_string(),
            None => event.timestamp.clock(offset),
        };

        Self {
            id: event.id,
            event: event.event.clone(),
            severity: event.severity,
            source: event.source.clone(),
            ip: event.ip.clone(),
            timestamp,
            details: event.details.clone(),
        }
    }
}
