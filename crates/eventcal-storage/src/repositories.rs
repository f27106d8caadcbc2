// Repository layer for database operations
//
// Each operation is exactly one statement sent through `Database::execute`.

use crate::error::{Result, StorageError};
use crate::gateway::{Database, SqlValue};
use crate::models::*;

const LIST_EVENTS_BY_USER: &str = r#"
    SELECT id, title, event_time, color, user_id
    FROM events
    WHERE user_id = $1
"#;

const INSERT_EVENT: &str = r#"
    INSERT INTO events (title, event_time, color, user_id)
    VALUES ($1, $2, $3, $4)
    RETURNING id, title, event_time, color, user_id
"#;

const UPDATE_EVENT: &str = r#"
    UPDATE events
    SET title = $1, event_time = $2, color = $3
    WHERE id = $4
    RETURNING id, title, event_time, color, user_id
"#;

const DELETE_EVENT: &str = r#"
    DELETE FROM events
    WHERE id = $1
"#;

impl Database {
    // ============================================
    // Events
    // ============================================

    /// Store-default order; callers must not rely on it
    pub async fn list_events_by_user(&self, user_id: i64) -> Result<Vec<EventRow>> {
        self.execute(LIST_EVENTS_BY_USER, vec![user_id.into()]).await
    }

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let rows: Vec<EventRow> = self
            .execute(
                INSERT_EVENT,
                vec![
                    input.title.into(),
                    input.event_time.into(),
                    input.color.into(),
                    input.user_id.into(),
                ],
            )
            .await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| StorageError::rejected("insert returned no row"))
    }

    /// Returns `None` when no event has this id
    pub async fn update_event(&self, id: i64, input: UpdateEventRow) -> Result<Option<EventRow>> {
        let rows: Vec<EventRow> = self
            .execute(
                UPDATE_EVENT,
                vec![
                    input.title.into(),
                    input.event_time.into(),
                    input.color.into(),
                    SqlValue::from(id),
                ],
            )
            .await?;

        Ok(rows.into_iter().next())
    }

    /// Idempotent: deleting a missing id succeeds
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let _: Vec<EventRow> = self.execute(DELETE_EVENT, vec![id.into()]).await?;
        Ok(())
    }
}
