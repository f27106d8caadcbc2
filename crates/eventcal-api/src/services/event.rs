// Event service
//
// One storage call per operation; no business rules beyond the mapping.

use eventcal_storage::{CreateEventRow, EventRow, Result, StorageBackend, UpdateEventRow};
use tracing::Instrument;

use crate::api::events::{CreateEventRequest, Event, UpdateEventRequest};

pub struct EventService {
    storage: StorageBackend,
}

impl EventService {
    pub fn new(storage: StorageBackend) -> Self {
        Self { storage }
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Event>> {
        let rows = self.storage.list_events_by_user(user_id).await?;
        tracing::debug!(user_id, count = rows.len(), "Listed events");
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn create(&self, req: CreateEventRequest) -> Result<Event> {
        let span = tracing::info_span!(
            "create_event",
            user_id = ?req.user_id,
            event_id = tracing::field::Empty,
        );

        async move {
            let input = CreateEventRow {
                title: req.title,
                event_time: req.event_time,
                color: req.color,
                user_id: req.user_id,
            };
            let row = self.storage.create_event(input).await?;
            tracing::Span::current().record("event_id", row.id);
            tracing::info!("Event created");
            Ok(Self::row_to_event(row))
        }
        .instrument(span)
        .await
    }

    /// `None` when no event has this id
    pub async fn update(&self, id: i64, req: UpdateEventRequest) -> Result<Option<Event>> {
        let input = UpdateEventRow {
            title: req.title,
            event_time: req.event_time,
            color: req.color,
        };
        let row = self.storage.update_event(id, input).await?;
        if row.is_none() {
            tracing::debug!(event_id = id, "Update matched no event");
        }
        Ok(row.map(Self::row_to_event))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.storage.delete_event(id).await?;
        tracing::info!(event_id = id, "Event deleted");
        Ok(())
    }

    fn row_to_event(row: EventRow) -> Event {
        Event {
            id: row.id,
            title: row.title,
            event_time: row.event_time,
            color: row.color,
            user_id: row.user_id,
        }
    }
}
