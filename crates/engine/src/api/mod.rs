//! API layer - HTTP entry points and the middleware stack around them.

pub mod http;
pub mod middleware;

use std::sync::Arc;

use axum::{http::StatusCode, Router};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer};

use crate::app::App;
use crate::infrastructure::config::AppConfig;
use middleware::{AccessLogSink, RequestLogState};

/// Build the full router: routes wrapped in [`with_middleware`].
pub fn router(app: Arc<App>, config: &AppConfig, access_log: Arc<dyn AccessLogSink>) -> Router {
    with_middleware(http::routes().with_state(app), config, access_log)
}

/// Bind the listening socket. `host` may be a name (`localhost`) or a bare IPv4/IPv6 address.
pub async fn bind_listener(host: &str, port: u16) -> std::io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Wrap `routes` in panic recovery, the request deadline, CORS and the access log.
///
/// The access log is outermost so it records the final status of every
/// request, recovered panics and timeouts included.
fn with_middleware(routes: Router, config: &AppConfig, access_log: Arc<dyn AccessLogSink>) -> Router {
    routes
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(middleware::build_cors_layer(&config.cors))
        .layer(axum::middleware::from_fn_with_state(
            RequestLogState::new(access_log, config.access_log.verbose_headers),
            middleware::log_requests,
        ))
}
