//! Custom Axum extractors
//!
//! Both reject with `ApiError` so malformed input gets the same JSON error
//! body as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract an integer event id from path.
///
/// Any integer parses; ids outside the `i32` range of the id column can
/// never match a row, so `stored` reports them as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventId(pub i64);

impl EventId {
    /// The id as stored in the `events` table, if it fits the column.
    pub fn stored(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(ValidationError::InvalidFormat {
        field: "id",
        reason: "must be an integer",
    })
}

impl<S> FromRequestParts<S> for EventId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        let id = raw.parse::<i64>().map_err(|_| invalid_id())?;
        Ok(Self(id))
    }
}

/// JSON body whose rejection is reported as `ApiError::InvalidBody`
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_id_must_fit_the_column() {
        assert_eq!(EventId(1).stored(), Some(1));
        assert_eq!(EventId(-3).stored(), Some(-3));
        assert_eq!(EventId(i64::from(i32::MAX) + 1).stored(), None);
        assert_eq!(EventId(99_999_999_999).stored(), None);
    }
}
