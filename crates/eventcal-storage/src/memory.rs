// In-memory storage implementation for dev mode and tests
// Decision: Use parking_lot for thread-safe access
// Decision: Ids come from a counter held under the same lock as the rows
//
// Mirrors the constraints of migrations/0001_create_events.sql so that
// callers observe the same accept/reject behavior as PostgreSQL.

use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::error::{Result, StorageError};
use crate::models::*;

#[derive(Default)]
struct EventTable {
    rows: BTreeMap<i64, EventRow>,
    last_id: i64,
}

/// In-memory database
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    events: RwLock<EventTable>,
}

fn not_null_violation(column: &str) -> StorageError {
    StorageError::rejected(format!(
        "null value in column \"{}\" of relation \"events\" violates not-null constraint",
        column
    ))
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================
    // Events
    // ============================================

    pub async fn list_events_by_user(&self, user_id: i64) -> Result<Vec<EventRow>> {
        Ok(self
            .events
            .read()
            .rows
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        if input.title.is_none() {
            return Err(not_null_violation("title"));
        }
        if input.event_time.is_none() {
            return Err(not_null_violation("event_time"));
        }
        let user_id = input.user_id.ok_or_else(|| not_null_violation("user_id"))?;

        let mut table = self.events.write();
        table.last_id += 1;
        let row = EventRow {
            id: table.last_id,
            title: input.title,
            event_time: input.event_time,
            color: input.color,
            user_id,
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    pub async fn update_event(&self, id: i64, input: UpdateEventRow) -> Result<Option<EventRow>> {
        let mut table = self.events.write();
        let Some(event) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        if input.title.is_none() {
            return Err(not_null_violation("title"));
        }
        if input.event_time.is_none() {
            return Err(not_null_violation("event_time"));
        }
        event.title = input.title;
        event.event_time = input.event_time;
        event.color = input.color;
        Ok(Some(event.clone()))
    }

    pub async fn delete_event(&self, id: i64) -> Result<()> {
        self.events.write().rows.remove(&id);
        Ok(())
    }
}
