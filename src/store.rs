//! In-memory log collection
//!
//! Loaded once at start-up and never mutated, so handlers share it through an
//! `Arc` without locking.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::StoreError;
use crate::models::{LogRecord, SecurityEvent};
use crate::seed;

#[derive(Debug, Clone)]
pub struct LogStore {
    records: Arc<[LogRecord]>,
    security_events: Arc<[SecurityEvent]>,
}

impl LogStore {
    /// Build a store. Later records reusing an id are dropped.
    pub fn new(records: Vec<LogRecord>, security_events: Vec<SecurityEvent>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            // Blank ids are malformed; the pipeline excludes and counts them
            if !record.id.trim().is_empty() && !seen.insert(record.id.clone()) {
                tracing::warn!(id = %record.id, "Duplicate log record id dropped");
                continue;
            }
            kept.push(record);
        }

        Self {
            records: kept.into(),
            security_events: security_events.into(),
        }
    }

    /// Built-in sample data with the live log anchored at `now`
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self::new(seed::sample_records(now), seed::sample_security_events())
    }

    /// Log records from a JSON array file; the security table stays seeded.
    ///
    /// Only a file that is not a JSON array fails. Entries that are not
    /// objects load as empty records, which the pipeline then excludes.
    pub fn from_file(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let records: Vec<LogRecord> = entries
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                serde_json::from_value(entry).unwrap_or_else(|err| {
                    tracing::warn!(position, error = %err, "Log entry is not an object");
                    LogRecord::default()
                })
            })
            .collect();

        tracing::info!(
            path = %path.display(),
            count = records.len(),
            "Loaded log records from file"
        );
        Ok(Self::new(records, seed::sample_security_events()))
    }

    pub fn load(config: &Config, now: DateTime<Utc>) -> Result<Self, StoreError> {
        match &config.seed_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::seeded(now)),
        }
    }

    /// Records, newest first
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn security_events(&self) -> &[SecurityEvent] {
        &self.security_events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{self, LogQuery};
    use crate::models::{Category, EventType, UNKNOWN_DAY};
    use std::io::Write;
    use tempfile::NamedTempFile;
    use tracing_test::traced_test;

    fn record(id: &str, detail: &str) -> LogRecord {
        LogRecord::new(id, Category::Activity, EventType::Login, "john", "now", detail)
    }

    #[test]
    #[traced_test]
    fn test_duplicate_ids_keep_first() {
        let store = LogStore::new(
            vec![record("1", "first"), record("2", "other"), record("1", "second")],
            Vec::new(),
        );

        let details: Vec<&str> = store.records().iter().map(|r| r.detail.as_str()).collect();
        assert_eq!(details, vec!["first", "other"]);
        assert!(logs_contain("Duplicate log record id dropped"));
    }

    #[test]
    fn test_blank_ids_are_not_deduplicated() {
        let store = LogStore::new(vec![record("", "a"), record("", "b")], Vec::new());
        assert_eq!(store.records().len(), 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "a", "category": "security", "type": "error", "actor": "system",
                  "timestamp": "2024-01-02T03:04:05Z", "detail": "Firewall tripped",
                  "sourceSystem": "Firewall"}},
                {{"id": "b", "category": "activity", "actor": "", "detail": "broken"}}
            ]"#
        )
        .unwrap();

        let store = LogStore::from_file(file.path()).unwrap();
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].source_system.as_deref(), Some("Firewall"));
        assert!(!store.records()[1].is_well_formed());
        assert_eq!(store.security_events().len(), 10);
    }

    #[test]
    #[traced_test]
    fn test_from_file_keeps_good_records_next_to_bad_ones() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "good", "category": "activity", "type": "login", "actor": "john",
                  "timestamp": "2024-01-02T10:00:00Z", "detail": "login ok"}},
                {{"id": 1, "category": "security", "actor": "jane",
                  "timestamp": "2024-01-02T09:00:00Z", "detail": "numeric id"}},
                {{"id": "no-actor", "actor": null, "detail": "x"}},
                {{"id": "null-time", "actor": "sys", "timestamp": null, "detail": "y"}},
                {{"id": "epoch-time", "actor": "sys", "timestamp": 1704189600, "detail": "z"}},
                42
            ]"#
        )
        .unwrap();

        let store = LogStore::from_file(file.path()).unwrap();
        assert_eq!(store.records().len(), 6);
        assert!(logs_contain("Log entry is not an object"));

        let result = logic::run(store.records(), &LogQuery::default());
        assert_eq!(result.excluded, 2);
        assert_eq!(result.total, 4);

        let days: Vec<(&str, Vec<&str>)> = result
            .groups
            .iter()
            .map(|g| (g.day.as_str(), g.records.iter().map(|r| r.id.as_str()).collect()))
            .collect();
        assert_eq!(
            days,
            vec![
                ("2024-01-02", vec!["good", "1"]),
                (UNKNOWN_DAY, vec!["null-time", "epoch-time"]),
            ]
        );
    }

    #[test]
    fn test_from_file_errors() {
        let missing = LogStore::from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(missing, Err(StoreError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"not": "an array"}}"#).unwrap();
        let bad = LogStore::from_file(file.path());
        assert!(matches!(bad, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_load_defaults_to_seed() {
        let store = LogStore::load(&Config::default(), Utc::now()).unwrap();
        assert_eq!(store.records().len(), 10);
    }
}
