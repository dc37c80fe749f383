//! Event record and validated event input
//!
//! `Event` mirrors a row of the `events` table. `NewEvent` and
//! `EventChanges` can only be built through constructors that enforce the
//! column constraints, so anything reaching the store is already valid.

use serde::Serialize;
use sqlx::FromRow;

use super::validation::{check_len, ValidationError};

/// Maximum length for `name` (VARCHAR(255))
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length for `date` (VARCHAR(255))
pub const MAX_DATE_LEN: usize = 255;

/// Maximum length for `status` (VARCHAR(100))
pub const MAX_STATUS_LEN: usize = 100;

/// Maximum length for `source` (VARCHAR(50))
pub const MAX_SOURCE_LEN: usize = 50;

/// Event record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub date: Option<String>,
    pub description: Option<String>,
    pub engagement: Option<i32>,
    pub status: Option<String>,
    pub source: Option<String>,
}

/// Writable event columns.
///
/// `id` is absent on purpose: it is assigned by the store and never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Name,
    Date,
    Description,
    Engagement,
    Status,
    Source,
}

impl EventField {
    /// Column name in the `events` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Date => "date",
            Self::Description => "description",
            Self::Engagement => "engagement",
            Self::Status => "status",
            Self::Source => "source",
        }
    }

    /// Character limit of the column, `None` for unbounded or non-text columns.
    pub fn max_len(self) -> Option<usize> {
        match self {
            Self::Name => Some(MAX_NAME_LEN),
            Self::Date => Some(MAX_DATE_LEN),
            Self::Status => Some(MAX_STATUS_LEN),
            Self::Source => Some(MAX_SOURCE_LEN),
            Self::Description | Self::Engagement => None,
        }
    }

    /// Validate a text value destined for this column.
    pub fn check_text(self, value: &str) -> Result<(), ValidationError> {
        if self == Self::Name && value.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        match self.max_len() {
            Some(max) => check_len(self.column(), value, max),
            None => Ok(()),
        }
    }
}

/// Validated event name: non-empty and within the column width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName(String);

impl EventName {
    /// Create a new event name.
    ///
    /// # Example
    /// ```
    /// use agenda_server::models::EventName;
    ///
    /// assert!(EventName::new("Launch").is_ok());
    /// assert!(EventName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        EventField::Name.check_text(s)?;
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Column values for a new event, everything except `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    name: EventName,
    date: Option<String>,
    description: Option<String>,
    engagement: Option<i32>,
    status: Option<String>,
    source: Option<String>,
}

impl NewEvent {
    /// Validate and assemble the fields of a new event.
    pub fn new(
        name: &str,
        date: Option<String>,
        description: Option<String>,
        engagement: Option<i32>,
        status: Option<String>,
        source: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = EventName::new(name)?;
        for (field, value) in [
            (EventField::Date, &date),
            (EventField::Description, &description),
            (EventField::Status, &status),
            (EventField::Source, &source),
        ] {
            if let Some(value) = value {
                field.check_text(value)?;
            }
        }

        Ok(Self {
            name,
            date,
            description,
            engagement,
            status,
            source,
        })
    }

    /// A new event carrying only its name.
    pub fn named(name: &str) -> Result<Self, ValidationError> {
        Self::new(name, None, None, None, None, None)
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn engagement(&self) -> Option<i32> {
        self.engagement
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// A value for one column of a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i32),
}

/// Partial update: the columns to overwrite and their new values.
///
/// Only fields that were supplied with a non-null value are recorded, in the
/// order they were set. Setting the same field twice keeps the latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventChanges {
    assignments: Vec<(EventField, FieldValue)>,
}

impl EventChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a text column change; `None` leaves the column untouched.
    pub fn set_text(
        &mut self,
        field: EventField,
        value: Option<String>,
    ) -> Result<&mut Self, ValidationError> {
        if field == EventField::Engagement {
            return Err(ValidationError::InvalidFormat {
                field: field.column(),
                reason: "must be an integer",
            });
        }
        if let Some(value) = value {
            field.check_text(&value)?;
            self.assign(field, FieldValue::Text(value));
        }
        Ok(self)
    }

    /// Record an integer column change; `None` leaves the column untouched.
    pub fn set_integer(
        &mut self,
        field: EventField,
        value: Option<i32>,
    ) -> Result<&mut Self, ValidationError> {
        if field != EventField::Engagement {
            return Err(ValidationError::InvalidFormat {
                field: field.column(),
                reason: "must be text",
            });
        }
        if let Some(value) = value {
            self.assign(field, FieldValue::Integer(value));
        }
        Ok(self)
    }

    fn assign(&mut self, field: EventField, value: FieldValue) {
        match self.assignments.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.assignments.push((field, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn get(&self, field: EventField) -> Option<&FieldValue> {
        self.assignments
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }
}

impl IntoIterator for EventChanges {
    type Item = (EventField, FieldValue);
    type IntoIter = std::vec::IntoIter<(EventField, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}
