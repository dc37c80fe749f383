//! In-memory `EventStore` used by the HTTP tests

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{Event, EventChanges, EventField, FieldValue, NewEvent};

use super::{DbError, EventStore};

/// Ids start at 1 and are never reused, like a SERIAL column.
#[derive(Default)]
pub struct MemoryEventStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Event>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn apply(event: &mut Event, changes: EventChanges) {
    for (field, value) in changes {
        match (field, value) {
            (EventField::Name, FieldValue::Text(v)) => event.name = v,
            (EventField::Date, FieldValue::Text(v)) => event.date = Some(v),
            (EventField::Description, FieldValue::Text(v)) => event.description = Some(v),
            (EventField::Status, FieldValue::Text(v)) => event.status = Some(v),
            (EventField::Source, FieldValue::Text(v)) => event.source = Some(v),
            (EventField::Engagement, FieldValue::Integer(v)) => event.engagement = Some(v),
            (field, value) => unreachable!("{field:?} cannot hold {value:?}"),
        }
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn init_schema(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn create(&self, event: NewEvent) -> Result<Event, DbError> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let created = Event {
            id: inner.last_id,
            name: event.name().as_str().to_owned(),
            date: event.date().map(str::to_owned),
            description: event.description().map(str::to_owned),
            engagement: event.engagement(),
            status: event.status().map(str::to_owned),
            source: event.source().map(str::to_owned),
        };
        inner.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Event>, DbError> {
        Ok(self.inner.lock().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Event>, DbError> {
        Ok(self.inner.lock().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, changes: EventChanges) -> Result<Option<Event>, DbError> {
        let mut inner = self.inner.lock().await;
        Ok(inner.rows.get_mut(&id).map(|event| {
            apply(event, changes);
            event.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, DbError> {
        Ok(self.inner.lock().await.rows.remove(&id).is_some())
    }
}
