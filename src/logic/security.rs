//! Security event table filtering

use serde::Serialize;

use super::search::SearchText;
use crate::models::{SecurityEvent, Severity};

/// Rows per severity, for the table header badges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl SeverityCounts {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }

    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
        }
    }
}

/// Keep rows matching both the severity (if any) and the search text.
/// Input order is kept.
pub fn filter_events<'a>(
    events: &'a [SecurityEvent],
    search: &SearchText,
    severity: Option<Severity>,
) -> Vec<&'a SecurityEvent> {
    events
        .iter()
        .filter(|e| severity.map_or(true, |s| e.severity == s))
        .filter(|e| search.matches_any(e.search_fields()))
        .collect()
}

pub fn severity_counts<'a, I>(events: I) -> SeverityCounts
where
    I: IntoIterator<Item = &'a SecurityEvent>,
{
    let mut counts = SeverityCounts::default();
    for event in events {
        counts.add(event.severity);
    }
    counts
}
