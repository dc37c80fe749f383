//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod event;
pub mod validation;

pub use event::{Event, EventChanges, EventField, EventName, FieldValue, NewEvent};
pub use validation::ValidationError;
