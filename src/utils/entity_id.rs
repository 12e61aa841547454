use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use crate::utils::app_error::AppError;

/// The `{id}` segment of a resource route. Anything that is not an `i32`
/// cannot name a row, so it is a 404 like any other unknown id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Unreadable id segment: {}", e);
                AppError::PageNotFound
            })?;

        parse_entity_id(&raw).map(EntityId)
    }
}

pub fn parse_entity_id(raw: &str) -> Result<i32, AppError> {
    raw.parse::<i32>().map_err(|_| {
        tracing::debug!("Non-numeric id segment {:?}", raw);
        AppError::PageNotFound
    })
}
