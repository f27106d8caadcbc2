// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: Option<String>,
    pub event_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub user_id: i64,
}

/// Input for inserting an event. Absent fields are written as NULL and left
/// to the schema's constraints.
#[derive(Debug, Clone, Default)]
pub struct CreateEventRow {
    pub title: Option<String>,
    pub event_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub user_id: Option<i64>,
}

/// Replacement values for the mutable columns of an event
#[derive(Debug, Clone, Default)]
pub struct UpdateEventRow {
    pub title: Option<String>,
    pub event_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
}
