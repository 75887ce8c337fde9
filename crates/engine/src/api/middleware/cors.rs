//! CORS layer built from [`CorsConfig`].

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::infrastructure::config::CorsConfig;

/// Build the CORS layer.
///
/// `"*"` in the origin, method or header list allows any value for that list.
/// Credentials are only advertised when all three lists are explicit; browsers
/// reject them alongside a wildcard.
/// Entries that are not valid header values are skipped with a warning.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let any_origin = config.allows_any_origin();
    let any_method = is_wildcard(&config.allowed_methods);
    let any_header = is_wildcard(&config.allowed_headers);

    let mut cors = CorsLayer::new();

    cors = if any_method {
        cors.allow_methods(Any)
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| match Method::from_bytes(m.to_ascii_uppercase().as_bytes()) {
                Ok(method) => Some(method),
                Err(_) => {
                    tracing::warn!(method = %m, "Ignoring invalid CORS method");
                    None
                }
            })
            .collect();
        cors.allow_methods(methods)
    };

    cors = if any_header {
        cors.allow_headers(Any)
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| match HeaderName::from_bytes(h.as_bytes()) {
                Ok(name) => Some(name),
                Err(_) => {
                    tracing::warn!(header = %h, "Ignoring invalid CORS header");
                    None
                }
            })
            .collect();
        cors.allow_headers(headers)
    };

    cors = if any_origin {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        cors.allow_origin(origins)
    };

    let wildcard = any_origin || any_method || any_header;
    if config.allow_credentials && wildcard {
        tracing::warn!(
            any_origin,
            any_method,
            any_header,
            "CORS_ALLOW_CREDENTIALS ignored with a wildcard CORS list"
        );
    }

    cors.allow_credentials(config.allow_credentials && !wildcard)
}

fn is_wildcard(list: &[String]) -> bool {
    list.iter().any(|entry| entry == "*")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    fn config(origins: &[&str], credentials: bool) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            allowed_methods: vec!["GET".into(), "post".into(), "OPTIONS".into()],
            allowed_headers: vec!["Content-Type".into(), "Authorization".into()],
            allow_credentials: credentials,
        }
    }

    fn app(config: &CorsConfig) -> Router {
        Router::new()
            .route("/combine", post(|| async { "combined" }))
            .layer(build_cors_layer(config))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/combine")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn preflight_from_allowed_origin_has_empty_body() {
        let config = config(&["http://localhost:3000"], true);
        let response = app(&config)
            .oneshot(preflight("http://localhost:3000"))
            .await
            .unwrap();

        assert!(response.status().is_success());
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        let methods = headers
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("POST"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn unlisted_origin_gets_no_allow_origin() {
        let config = config(&["http://localhost:3000"], false);
        let response = app(&config)
            .oneshot(preflight("https://evil.test"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn wildcard_origin_drops_credentials() {
        let config = config(&["*"], true);
        let response = app(&config)
            .oneshot(preflight("https://anywhere.test"))
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn simple_requests_pass_through_with_origin_header() {
        let config = config(&["http://localhost:3000"], false);
        let request = Request::builder()
            .method(Method::POST)
            .uri("/combine")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = app(&config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn wildcard_headers_with_credentials_still_serve() {
        let mut config = config(&["http://localhost:3000"], true);
        config.allowed_headers = vec!["*".into()];

        let response = app(&config)
            .oneshot(preflight("http://localhost:3000"))
            .await
            .unwrap();

        assert!(response.status().is_success());
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "*");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[tokio::test]
    async fn wildcard_methods_with_credentials_still_serve() {
        let mut config = config(&["http://localhost:3000"], true);
        config.allowed_methods = vec!["*".into()];

        let response = app(&config)
            .oneshot(preflight("http://localhost:3000"))
            .await
            .unwrap();

        assert!(response.status().is_success());
        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "*");
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }
}
