use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use userdesk_core::UserId;

use crate::app::errors::ApiError;

/// Typed `{id}` path segment.
///
/// Only plain decimal digits match; anything else is rejected as if no route
/// existed, so malformed ids never reach the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NoRoute)?;
        let id = raw.parse::<UserId>()?;
        Ok(Self(id))
    }
}
