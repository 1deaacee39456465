//! Log record model

use chrono::{DateTime, FixedOffset, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Bucket key for records whose time is only a display label
pub const UNKNOWN_DAY: &str = "unknown-day";

/// Coarse classification used by the log tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Activity,
    Security,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Event kind. Only affects how a record is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Login,
    Register,
    Logout,
    Warning,
    Success,
    Error,
    Info,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EventType {
    /// Known types in display order
    pub const KNOWN: [EventType; 7] = [
        Self::Login,
        Self::Register,
        Self::Logout,
        Self::Warning,
        Self::Success,
        Self::Error,
        Self::Info,
    ];

    /// Capitalized name shown next to the status dot
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Logout => "Logout",
            Self::Warning => "Warning",
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Info => "Info",
            Self::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Login | Self::Success => Tone::Green,
            Self::Register | Self::Info => Tone::Blue,
            Self::Logout => Tone::Orange,
            Self::Warning => Tone::Yellow,
            Self::Error => Tone::Red,
            Self::Unknown => Tone::Gray,
        }
    }
}

/// Colour family for status dots and row borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Orange,
    Yellow,
    Red,
    Gray,
}

/// When a record happened.
///
/// Feeds may hand over pre-formatted strings ("2 mins ago") instead of an
/// instant. Those are kept verbatim as a `Label` and never parsed further.
/// Deserialization never fails: non-RFC 3339 strings and numbers become
/// labels, anything else an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LogTime {
    At(DateTime<Utc>),
    Label(String),
}

impl Default for LogTime {
    fn default() -> Self {
        Self::Label(String::new())
    }
}

impl LogTime {
    /// Calendar day (`YYYY-MM-DD`) in the given offset, or [`UNKNOWN_DAY`]
    pub fn day_key(&self, offset: FixedOffset) -> String {
        match self {
            Self::At(at) => at.with_timezone(&offset).format("%Y-%m-%d").to_string(),
            Self::Label(_) => UNKNOWN_DAY.to_string(),
        }
    }

    /// Clock time (`HH:MM:SS`) in the given offset; labels pass through
    pub fn clock(&self, offset: FixedOffset) -> String {
        match self {
            Self::At(at) => at.with_timezone(&offset).format("%H:%M:%S").to_string(),
            Self::Label(label) => label.clone(),
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(*at),
            Self::Label(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for LogTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(text) => DateTime::parse_from_rfc3339(&text)
                .map(|at| Self::At(at.with_timezone(&Utc)))
                .unwrap_or_else(|_| Self::Label(text)),
            Value::Number(n) => Self::Label(n.to_string()),
            _ => Self::default(),
        })
    }
}

impl From<DateTime<Utc>> for LogTime {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

impl From<String> for LogTime {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<&str> for LogTime {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

/// A single activity or security event.
///
/// Required text fields default to empty when missing from the input so a
/// malformed record still loads; [`LogRecord::is_well_formed`] decides
/// whether it may be shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    #[serde(default, deserialize_with = "text")]
    pub id: String,
    #[serde(default, deserialize_with = "or_default")]
    pub category: Category,
    #[serde(rename = "type", default, deserialize_with = "or_default")]
    pub event_type: EventType,
    #[serde(default, deserialize_with = "text")]
    pub actor: String,
    #[serde(default)]
    pub timestamp: LogTime,
    #[serde(default, deserialize_with = "text")]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_text")]
    pub source_system: Option<String>,
}

impl LogRecord {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        event_type: EventType,
        actor: impl Into<String>,
        timestamp: impl Into<LogTime>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            event_type,
            actor: actor.into(),
            timestamp: timestamp.into(),
            detail: detail.into(),
            origin: None,
            source_system: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_source_system(mut self, source: impl Into<String>) -> Self {
        self.source_system = Some(source.into());
        self
    }

    /// A record needs an id, an actor and a detail line to be shown
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
            && !self.actor.trim().is_empty()
            && !self.detail.trim().is_empty()
    }

    /// Text fields the search box looks at. Absent optionals are skipped.
    pub fn search_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.actor.as_str()),
            Some(self.detail.as_str()),
            self.origin.as_deref(),
            self.source_system.as_deref(),
        ]
        .into_iter()
        .flatten()
    }
}

/// Strings as-is, numbers and booleans in their JSON form, anything else
/// absent
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| scalar_text(v).unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(scalar_text)
}

/// Values of the wrong shape fall back to the type's default
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Value::deserialize(deserializer).map(|v| serde_json::from_value(v).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "id": "1",
            "category": "activity",
            "type": "login",
            "actor": "john.doe@example.com",
            "timestamp": "2024-01-02T10:15:00Z",
            "detail": "Successful login from Chrome on Windows",
            "origin": "192.168.1.1"
        }"#;

        let record: LogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Activity);
        assert_eq!(record.event_type, EventType::Login);
        assert_eq!(record.timestamp, LogTime::At(utc(2024, 1, 2, 10, 15)));
        assert_eq!(record.origin.as_deref(), Some("192.168.1.1"));
        assert_eq!(record.source_system, None);
        assert!(record.is_well_formed());
    }

    #[test]
    fn test_unknown_enums_degrade() {
        let json = r#"{
            "id": "7",
            "category": "billing",
            "type": "panic",
            "actor": "system",
            "timestamp": "2 mins ago",
            "detail": "Something odd"
        }"#;

        let record: LogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Unknown);
        assert_eq!(record.event_type, EventType::Unknown);
        assert_eq!(record.event_type.tone(), Tone::Gray);
        assert_eq!(record.timestamp, LogTime::Label("2 mins ago".to_string()));
    }

    #[test]
    fn test_missing_required_fields_load_as_malformed() {
        let record: LogRecord =
            serde_json::from_str(r#"{"id": "9", "category": "security"}"#).unwrap();
        assert!(record.actor.is_empty());
        assert_eq!(record.timestamp, LogTime::default());
        assert!(!record.is_well_formed());

        let blank_actor =
            LogRecord::new("1", Category::Activity, EventType::Login, "   ", "now", "x");
        assert!(!blank_actor.is_well_formed());
    }

    #[test]
    fn test_source_system_uses_camel_case() {
        let record =
            LogRecord::new("4", Category::Security, EventType::Error, "system", "now", "DDoS")
                .with_source_system("Firewall");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["sourceSystem"], "Firewall");
        assert_eq!(value["type"], "error");
        assert!(value.get("origin").is_none());
    }

    #[test]
    fn test_day_key_and_clock_follow_offset() {
        let time = LogTime::At(utc(2024, 1, 2, 23, 30));
        let utc_offset = FixedOffset::east_opt(0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(time.day_key(utc_offset), "2024-01-02");
        assert_eq!(time.clock(utc_offset), "23:30:00");
        assert_eq!(time.day_key(plus_two), "2024-01-03");
        assert_eq!(time.clock(plus_two), "01:30:00");
    }

    #[test]
    fn test_label_time_buckets_as_unknown_day() {
        let time = LogTime::from("Yesterday");
        let offset = FixedOffset::east_opt(0).unwrap();

        assert_eq!(time.day_key(offset), UNKNOWN_DAY);
        assert_eq!(time.clock(offset), "Yesterday");
        assert_eq!(time.instant(), None);
    }

    #[test]
    fn test_search_fields_skip_absent_optionals() {
        let record =
            LogRecord::new("1", Category::Activity, EventType::Login, "jane", "now", "hello")
                .with_origin("10.0.0.1");
        let fields: Vec<&str> = record.search_fields().collect();
        assert_eq!(fields, vec!["jane", "hello", "10.0.0.1"]);
    }

    #[test]
    fn test_tones_match_list_view() {
        assert_eq!(EventType::Login.tone(), EventType::Success.tone());
        assert_eq!(EventType::Register.tone(), Tone::Blue);
        assert_eq!(EventType::Info.tone(), Tone::Blue);
        assert_eq!(EventType::Logout.tone(), Tone::Orange);
        assert_eq!(EventType::Warning.tone(), Tone::Yellow);
        assert_eq!(EventType::Error.tone(), Tone::Red);
        assert_eq!(EventType::Warning.label(), "Warning");
    }

    #[test]
    fn test_wrong_shaped_values_degrade() {
        let json = r#"{
            "id": 1,
            "category": 3,
            "type": null,
            "actor": null,
            "timestamp": 1704189600,
            "detail": true,
            "origin": 10,
            "sourceSystem": {"name": "Firewall"}
        }"#;

        let record: LogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.category, Category::Unknown);
        assert_eq!(record.event_type, EventType::Unknown);
        assert_eq!(record.actor, "");
        assert_eq!(record.timestamp, LogTime::Label("1704189600".to_string()));
        assert_eq!(record.detail, "true");
        assert_eq!(record.origin.as_deref(), Some("10"));
        assert_eq!(record.source_system, None);
        assert!(!record.is_well_formed());
    }

    #[test]
    fn test_null_timestamp_is_empty_label() {
        let record: LogRecord =
            serde_json::from_str(r#"{"id": "2", "actor": "a", "detail": "b", "timestamp": null}"#)
                .unwrap();
        let offset = FixedOffset::east_opt(0).unwrap();

        assert_eq!(record.timestamp, LogTime::default());
        assert_eq!(record.timestamp.day_key(offset), UNKNOWN_DAY);
        assert!(record.is_well_formed());
    }
}
