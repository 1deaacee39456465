//! Log query logic

pub mod pipeline;
pub mod search;
pub mod security;
pub mod summary;

pub use pipeline::{run, CategoryFilter, DayGroup, LogQuery, LogQueryResult, ParseCategoryError};
pub use search::SearchText;
pub use security::{filter_events, severity_counts, SeverityCounts};
pub use summary::{overview, Overview};
