use axum::Router;

pub mod common;
pub mod system;
pub mod users;

/// Router for all user-record endpoints.
pub fn router() -> Router {
    Router::new().merge(users::router())
}
