//! HTTP handlers

pub mod health;
pub mod logs;
pub mod security;
pub mod dashboard;

use crate::{AppError, AppResult};

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Reject search text longer than `max` characters
fn check_search_len(search: Option<&str>, max: usize) -> AppResult<()> {
    let len = search.map_or(0, |s| s.chars().count());
    if len > max {
        return Err(AppError::ValidationError(format!(
            "search text is {} characters, limit is {}",
            len, max
        )));
    }
    Ok(())
}
