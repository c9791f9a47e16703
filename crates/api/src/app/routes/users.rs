use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;

use userdesk_users::User;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::routes::common::UserIdPath;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> Json<Vec<User>> {
    Json(services.users().list())
}

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let new = dto::parse_create_user(&body)?;
    let user = services.users().create(new);
    tracing::info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)).into_response())
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>, ApiError> {
    services.users().get(id).map(Json).ok_or(ApiError::NotFound)
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    UserIdPath(id): UserIdPath,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    // Existence is checked before the body is looked at.
    if services.users().get(id).is_none() {
        return Err(ApiError::NotFound);
    }
    let patch = dto::parse_update_user(&body)?;

    // The record may have been deleted since the check above.
    let user = services.users().update(id, patch).ok_or(ApiError::NotFound)?;
    tracing::info!(user_id = %id, "user updated");
    Ok(Json(user))
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<Value>, ApiError> {
    if !services.users().delete(id) {
        return Err(ApiError::NotFound);
    }
    tracing::info!(user_id = %id, "user deleted");
    Ok(Json(dto::message("User deleted")))
}
