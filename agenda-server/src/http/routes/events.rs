//! Event endpoints
//!
//! | method | path | success |
//! |---|---|---|
//! | POST | /events | 201 + event |
//! | GET | /events | 200 + events ordered by id |
//! | GET | /events/{id} | 200 + event |
//! | PUT | /events/{id} | 200 + updated event |
//! | DELETE | /events/{id} | 204 |
//!
//! Unknown ids answer 404 on every `{id}` route.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{EventId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Event, EventChanges, EventField, NewEvent, ValidationError};

/// Create event request
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub engagement: Option<i32>,
    pub status: Option<String>,
    pub source: Option<String>,
}

impl TryFrom<CreateEventRequest> for NewEvent {
    type Error = ValidationError;

    fn try_from(req: CreateEventRequest) -> Result<Self, Self::Error> {
        NewEvent::new(
            &req.name,
            req.date,
            req.description,
            req.engagement,
            req.status,
            req.source,
        )
    }
}

/// Update event request.
///
/// Every field is optional and `null` counts as absent, so a field cannot
/// be cleared through this endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub engagement: Option<i32>,
    pub status: Option<String>,
    pub source: Option<String>,
}

impl TryFrom<UpdateEventRequest> for EventChanges {
    type Error = ValidationError;

    fn try_from(req: UpdateEventRequest) -> Result<Self, Self::Error> {
        let mut changes = EventChanges::new();
        changes
            .set_text(EventField::Name, req.name)?
            .set_text(EventField::Date, req.date)?
            .set_text(EventField::Description, req.description)?
            .set_integer(EventField::Engagement, req.engagement)?
            .set_text(EventField::Status, req.status)?
            .set_text(EventField::Source, req.source)?;
        Ok(changes)
    }
}

/// Event response
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i32,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub engagement: Option<i32>,
    pub status: Option<String>,
    pub source: Option<String>,
}

impl From<Event> for EventResponse {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            date: e.date,
            description: e.description,
            engagement: e.engagement,
            status: e.status,
            source: e.source,
        }
    }
}

fn not_found(id: EventId) -> ApiError {
    ApiError::NotFound {
        resource: "event",
        id: id.0.to_string(),
    }
}

/// GET /events - list all events
async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventResponse>>, ApiError> {
    let events = state.store.list().await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// POST /events - create a new event
async fn create_event(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), ApiError> {
    let new_event = NewEvent::try_from(req)?;
    let event = state.store.create(new_event).await?;

    tracing::info!(id = event.id, "event created");
    Ok((StatusCode::CREATED, Json(EventResponse::from(event))))
}

/// GET /events/{id} - get a single event
async fn get_event(
    State(state): State<Arc<AppState>>,
    id: EventId,
) -> Result<Json<EventResponse>, ApiError> {
    let stored = id.stored().ok_or_else(|| not_found(id))?;
    let event = state.store.get(stored).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(EventResponse::from(event)))
}

/// PUT /events/{id} - overwrite the supplied fields of an event
async fn update_event(
    State(state): State<Arc<AppState>>,
    id: EventId,
    ValidJson(req): ValidJson<UpdateEventRequest>,
) -> Result<Json<EventResponse>, ApiError> {
    let changes = EventChanges::try_from(req)?;
    let stored = id.stored().ok_or_else(|| not_found(id))?;
    let event = state
        .store
        .update(stored, changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(EventResponse::from(event)))
}

/// DELETE /events/{id} - delete an event
async fn delete_event(
    State(state): State<Arc<AppState>>,
    id: EventId,
) -> Result<StatusCode, ApiError> {
    let stored = id.stored().ok_or_else(|| not_found(id))?;
    if !state.store.delete(stored).await? {
        return Err(not_found(id));
    }

    tracing::info!(id = stored, "event deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Event routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}
