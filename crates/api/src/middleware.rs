use std::time::Instant;

use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Permissive CORS on every response.
///
/// Preflight `OPTIONS` for anything under `/users` is answered here with an
/// empty 200, before routing.
pub async fn cors_middleware(req: Request, next: Next) -> Response {
    let mut res = if is_users_preflight(req.method(), req.uri().path()) {
        StatusCode::OK.into_response()
    } else {
        next.run(req).await
    };

    apply_cors_headers(res.headers_mut());
    res
}

/// One `info` line per request once the response is ready.
pub async fn request_log_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = res.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );
    res
}

fn is_users_preflight(method: &Method, path: &str) -> bool {
    method == Method::OPTIONS && path.starts_with("/users")
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_matches_any_users_prefix() {
        assert!(is_users_preflight(&Method::OPTIONS, "/users"));
        assert!(is_users_preflight(&Method::OPTIONS, "/users/7"));
        assert!(is_users_preflight(&Method::OPTIONS, "/users/abc/extra"));
        assert!(!is_users_preflight(&Method::OPTIONS, "/health"));
        assert!(!is_users_preflight(&Method::GET, "/users"));
    }

    #[test]
    fn cors_headers_are_stamped() {
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    }
}
