//! Log query pipeline
//!
//! Turns the resident log collection plus the current tab and search box into
//! the rows the log list should show, split under date headers.
//!
//! ```text
//!  records ──► well-formed ──► category ──► search ──► group by day
//!  (newest first)                                      (first-seen order)
//! ```
//!
//! Every stage only drops records; nothing is reordered. The function holds
//! no state, so it can run on every keystroke.


use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::search::SearchText;
use crate::models::{Category, LogRecord};

/// Which tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Activity,
    Security,
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Activity => category == Category::Activity,
            Self::Security => category == Category::Security,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Activity => "activity",
            Self::Security => "security",
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}', expected all, activity or security")]
pub struct ParseCategoryError(pub String);

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "activity" => Ok(Self::Activity),
            "security" => Ok(Self::Security),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Filter state for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub category: CategoryFilter,
    pub search: SearchText,
    /// Offset used to pick the calendar day of each record
    pub day_offset: FixedOffset,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: SearchText::default(),
            day_offset: Utc.fix(),
        }
    }
}

impl LogQuery {
    pub fn new(category: CategoryFilter, search: &str) -> Self {
        Self {
            category,
            search: SearchText::new(search),
            ..Self::default()
        }
    }

    pub fn with_day_offset(mut self, offset: FixedOffset) -> Self {
        self.day_offset = offset;
        self
    }

    fn keeps(&self, record: &LogRecord) -> bool {
        self.category.admits(record.category) && self.search.matches_any(record.search_fields())
    }
}

/// Records sharing one calendar day, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub day: String,
    pub records: Vec<&'a LogRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogQueryResult<'a> {
    pub groups: Vec<DayGroup<'a>>,
    /// Records that survived filtering
    pub total: usize,
    /// Malformed records dropped before filtering
    pub excluded: usize,
}

impl<'a> LogQueryResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Surviving records in display order
    #[cfg(test)]
    pub(crate) fn records(&self) -> impl Iterator<Item = &'a LogRecord> + '_ {
        self.groups.iter().flat_map(|g| g.records.iter().copied())
    }
}

/// Run the pipeline over `records`, which must already be newest first.
pub fn run<'a>(records: &'a [LogRecord], query: &LogQuery) -> LogQueryResult<'a> {
    let mut result = LogQueryResult::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        if !record.is_well_formed() {
            result.excluded += 1;
            continue;
        }
        if !query.keeps(record) {
            continue;
        }

        let day = record.timestamp.day_key(query.day_offset);
        let slot = match index.get(&day) {
            Some(&slot) => slot,
            None => {
                let slot = result.groups.len();
                index.insert(day.clone(), slot);
                result.groups.push(DayGroup {
                    day,
                    records: Vec::new(),
                });
                slot
            }
        };
        result.groups[slot].records.push(record);
        result.total += 1;
    }

    result
}
