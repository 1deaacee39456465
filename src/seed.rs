//! Built-in sample data
//!
//! The combined log list is generated relative to `now` so the "real-time"
//! view always shows fresh entries; the security table uses fixed times.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::models::{Category, EventType, LogRecord, LogTime, SecurityEvent, Severity};

/// Combined activity and security log, newest first
pub fn sample_records(now: DateTime<Utc>) -> Vec<LogRecord> {
    let ago = |minutes: i64| now - Duration::minutes(minutes);

    vec![
        LogRecord::new(
            "1",
            Category::Activity,
            EventType::Login,
            "john.doe@example.com",
            ago(2),
            "Successful login from Chrome on Windows",
        )
        .with_origin("192.168.1.1"),
        LogRecord::new(
            "2",
            Category::Activity,
            EventType::Register,
            "jane.smith@example.com",
            ago(10),
            "New user registration completed",
        )
        .with_origin("192.168.1.45"),
        LogRecord::new(
            "3",
            Category::Security,
            EventType::Warning,
            "michael.brown@example.com",
            ago(25),
            "Failed login attempt (3rd attempt)",
        )
        .with_origin("203.45.67.89"),
        LogRecord::new(
            "4",
            Category::Security,
            EventType::Error,
            "system",
            ago(35),
            "Potential DDoS attack detected and blocked",
        )
        .with_source_system("Firewall"),
        LogRecord::new(
            "5",
            Category::Activity,
            EventType::Logout,
            "sarah.wilson@example.com",
            ago(46),
            "User session ended",
        )
        .with_origin("192.168.0.23"),
        LogRecord::new(
            "6",
            Category::Security,
            EventType::Success,
            "system",
            ago(55),
            "Daily database backup completed successfully",
        )
        .with_source_system("Backup Service"),
        LogRecord::new(
            "7",
            Category::Activity,
            EventType::Login,
            "robert.johnson@example.com",
            ago(60),
            "Successful login from Safari on MacOS",
        )
        .with_origin("192.168.3.15"),
        LogRecord::new(
            "8",
            Category::Security,
            EventType::Info,
            "admin",
            ago(70),
            "User role updated for jane.smith@example.com",
        )
        .with_source_system("User Management"),
        LogRecord::new(
            "9",
            Category::Security,
            EventType::Warning,
            "system",
            ago(85),
            "High CPU usage detected (85%)",
        )
        .with_source_system("Resource Monitor"),
        LogRecord::new(
            "10",
            Category::Security,
            EventType::Error,
            "api.service",
            ago(100),
            "Rate limit exceeded for client ID: 45872",
        )
        .with_source_system("API Gateway"),
    ]
}

/// Table-formatted times (`2023-06-10 14:32:45`) become instants; anything
/// else is kept as a label.
fn table_time(text: &str) -> LogTime {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .map(|naive| LogTime::At(naive.and_utc()))
        .unwrap_or_else(|_| LogTime::from(text))
}

fn security_event(
    id: u32,
    event: &str,
    severity: Severity,
    source: &str,
    ip: &str,
    timestamp: &str,
    details: &str,
) -> SecurityEvent {
    SecurityEvent {
        id,
        event: event.to_string(),
        severity,
        source: source.to_string(),
        ip: ip.to_string(),
        timestamp: table_time(timestamp),
        details: details.to_string(),
    }
}

/// Security event table, newest first
pub fn sample_security_events() -> Vec<SecurityEvent> {
    vec![
        security_event(
            1,
            "Failed Login Attempt",
            Severity::High,
            "Auth System",
            "203.45.67.89",
            "2023-06-10 14:32:45",
            "Multiple failed login attempts for user john.doe@example.com",
        ),
        security_event(
            2,
            "New Admin User Created",
            Severity::Medium,
            "User Management",
            "192.168.1.45",
            "2023-06-10 13:15:22",
            "New admin user 'admin2' created by 'admin1'",
        ),
        security_event(
            3,
            "Password Reset",
            Severity::Low,
            "Auth System",
            "192.168.1.102",
            "2023-06-10 12:05:11",
            "Password reset for user sarah.brown@example.com",
        ),
        security_event(
            4,
            "API Token Revoked",
            Severity::Medium,
            "API Gateway",
            "192.168.1.1",
            "2023-06-10 11:47:36",
            "API token for service 'analytics' was revoked",
        ),
        security_event(
            5,
            "Account Locked",
            Severity::High,
            "Auth System",
            "203.45.67.89",
            "2023-06-10 10:32:18",
            "Account 'robert.johnson' locked after 5 failed attempts",
        ),
        security_event(
            6,
            "File Access",
            Severity::Low,
            "File System",
            "192.168.1.45",
            "2023-06-10 09:15:49",
            "User 'jane.smith' accessed sensitive document 'financial-2023.pdf'",
        ),
        security_event(
            7,
            "System Update",
            Severity::Low,
            "Update Service",
            "192.168.1.1",
            "2023-06-10 08:05:33",
            "System updated to version 2.4.5",
        ),
        security_event(
            8,
            "Suspicious Activity",
            Severity::High,
            "Behavior Analysis",
            "209.58.178.45",
            "2023-06-10 07:44:21",
            "Unusual access pattern detected for user 'michael.wilson'",
        ),
        security_event(
            9,
            "Database Backup",
            Severity::Low,
            "Database",
            "192.168.1.2",
            "2023-06-10 06:30:09",
            "Automated database backup completed successfully",
        ),
        security_event(
            10,
            "Permission Change",
            Severity::Medium,
            "User Management",
            "192.168.1.45",
            "2023-06-10 05:22:47",
            "User 'emily.davis' granted 'editor' permissions",
        ),
    ]
}
