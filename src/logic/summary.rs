//! Dashboard overview built from the log collection

use crate::models::{Category, EventType, LogRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview<'a> {
    pub total: usize,
    pub activity: usize,
    pub security: usize,
    /// Counts for every known type, in display order. Unknown types are
    /// only part of `total`.
    pub by_type: Vec<(EventType, usize)>,
    pub recent_activity: Vec<&'a LogRecord>,
    pub recent_security: Vec<&'a LogRecord>,
    pub excluded: usize,
}

/// Summarize well-formed records. `recent` caps each recent list; records
/// are assumed newest first.
pub fn overview(records: &[LogRecord], recent: usize) -> Overview<'_> {
    let mut summary = Overview {
        total: 0,
        activity: 0,
        security: 0,
        by_type: EventType::KNOWN.iter().map(|t| (*t, 0)).collect(),
        recent_activity: Vec::new(),
        recent_security: Vec::new(),
        excluded: 0,
    };

    for record in records {
        if !record.is_well_formed() {
            summary.excluded += 1;
            continue;
        }
        summary.total += 1;

        if let Some(slot) = summary.by_type.iter_mut().find(|(t, _)| *t == record.event_type) {
            slot.1 += 1;
        }

        match record.category {
            Category::Activity => {
                summary.activity += 1;
                if summary.recent_activity.len() < recent {
                    summary.recent_activity.push(record);
                }
            }
            Category::Security => {
                summary.security += 1;
                if summary.recent_security.len() < recent {
                    summary.recent_security.push(record);
                }
            }
            Category::Unknown => {}
        }
    }

    summary
}
