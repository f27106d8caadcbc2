// Event CRUD HTTP routes
//
// Every handler awaits exactly one service call. Missing body fields are
// passed through as NULL; the store's schema decides whether they are
// acceptable.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use eventcal_storage::StorageBackend;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::common::{ErrorResponse, MessageResponse};
use super::error::ApiError;
use super::lenient;
use crate::services::EventService;

pub const EVENT_DELETED_MESSAGE: &str = "Event deleted";

/// A calendar event owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Standup")]
    pub title: Option<String>,
    #[schema(example = "2024-01-01T09:00:00Z")]
    pub event_time: Option<DateTime<Utc>>,
    #[schema(example = "blue")]
    pub color: Option<String>,
    /// Owning user. Never changes after creation.
    #[schema(example = 42)]
    pub user_id: i64,
}

/// Request to create an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Standup")]
    pub title: Option<String>,
    /// RFC 3339, or a naive timestamp read as UTC.
    #[schema(example = "2024-01-01T09:00:00Z")]
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub event_time: Option<DateTime<Utc>>,
    #[schema(example = "blue")]
    pub color: Option<String>,
    /// Integer or numeric string.
    #[schema(example = 42)]
    #[serde(default, deserialize_with = "lenient::id")]
    pub user_id: Option<i64>,
}

/// Request to update an event. All three fields are replaced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    #[schema(example = "Standup v2")]
    pub title: Option<String>,
    #[schema(example = "2024-01-01T09:30:00Z")]
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub event_time: Option<DateTime<Utc>>,
    #[schema(example = "red")]
    pub color: Option<String>,
}

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(storage: StorageBackend) -> Self {
        Self {
            service: Arc::new(EventService::new(storage)),
        }
    }
}

/// Create event routes
///
/// GET reads a user id from the same segment where PUT/DELETE read an event
/// id, so the three share one route (and one OpenAPI path).
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", post(create_event))
        .route(
            "/events/:id",
            get(list_events).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

/// GET /events/{user_id} - List a user's events
#[utoipa::path(
    get,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Owning user ID")
    ),
    responses(
        (status = 200, description = "Events owned by the user (possibly empty)", body = Vec<Event>),
        (status = 400, description = "User ID is not an integer", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let Path(user_id) = path?;
    let events = state.service.list_by_user(user_id).await.map_err(|e| {
        tracing::error!("Failed to list events: {}", e);
        e
    })?;

    Ok(Json(events))
}

/// POST /events - Create an event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 200, description = "Event created", body = Event),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Store rejected the event", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<Json<Event>, ApiError> {
    let Json(req) = payload?;
    let event = state.service.create(req).await.map_err(|e| {
        tracing::error!("Failed to create event: {}", e);
        e
    })?;

    Ok(Json(event))
}

/// PUT /events/{id} - Replace title, event_time and color
///
/// Responds with `null` when no event has this id.
#[utoipa::path(
    put,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event, or null if no event matched", body = Event),
        (status = 400, description = "Malformed id or request body", body = ErrorResponse),
        (status = 500, description = "Store rejected the update", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> Result<Json<Option<Event>>, ApiError> {
    let Path(id) = path?;
    let Json(req) = payload?;
    let event = state.service.update(id, req).await.map_err(|e| {
        tracing::error!("Failed to update event: {}", e);
        e
    })?;

    Ok(Json(event))
}

/// DELETE /events/{id} - Delete an event
///
/// Succeeds whether or not the event existed.
#[utoipa::path(
    delete,
    path = "/events/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 400, description = "Event ID is not an integer", body = ErrorResponse),
        (status = 503, description = "Storage unavailable", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.service.delete(id).await.map_err(|e| {
        tracing::error!("Failed to delete event: {}", e);
        e
    })?;

    Ok(Json(MessageResponse::new(EVENT_DELETED_MESSAGE)))
}
