use axum::{
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};

use crate::app::errors::ApiError;

const DOCS_PAGE: &str = include_str!("../../../assets/index.html");
const OPENAPI_DOCUMENT: &str = include_str!("../../../assets/openapi.json");

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Swagger UI shell; loads `/openapi.json`.
pub async fn docs() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

pub async fn openapi() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

pub async fn no_route() -> ApiError {
    ApiError::NoRoute
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_is_valid_json() {
        let doc: Value = serde_json::from_str(OPENAPI_DOCUMENT).unwrap();
        assert_eq!(doc["openapi"], "3.0.0");
        assert!(doc["paths"]["/users"].is_object());
        assert!(doc["paths"]["/users/{id}"]["delete"].is_object());
    }

    #[test]
    fn docs_page_points_at_openapi_document() {
        assert!(DOCS_PAGE.contains("swagger-ui"));
        assert!(DOCS_PAGE.contains("/openapi.json"));
    }
}
