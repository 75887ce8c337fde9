//! Access logging middleware
//!
//! Writes one entry per request into an explicitly provided [`AccessLogSink`].
//! The sink is built by the caller and handed to the router, so nothing here
//! touches a process-wide log target.
//!
//! # Usage
//!
//! ```rust,ignore
//! use axum::{middleware, Router};
//!
//! let log = RequestLogState::new(Arc::new(TracingAccessLog), false);
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn_with_state(log, log_requests));
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::HttpBody,
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::correlation::CorrelationId;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// One completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    /// Response body size, 0 when unknown (streamed bodies)
    pub bytes: u64,
    pub duration: Duration,
    pub client_ip: String,
    pub user_agent: String,
    /// Only filled in verbose mode
    pub request_headers: Vec<(String, String)>,
    /// Only filled in verbose mode
    pub response_headers: Vec<(String, String)>,
}

/// Destination for access log entries.
pub trait AccessLogSink: Send + Sync {
    fn record(&self, entry: &AccessLogEntry);
}

/// Default sink: one `tracing` event per request, plus one per header in verbose mode.
pub struct TracingAccessLog;

impl AccessLogSink for TracingAccessLog {
    fn record(&self, entry: &AccessLogEntry) {
        tracing::info!(
            request_id = %entry.request_id,
            method = %entry.method,
            path = %entry.path,
            status = entry.status,
            bytes = entry.bytes,
            duration_ms = entry.duration.as_secs_f64() * 1000.0,
            ip = %entry.client_ip,
            ua = %entry.user_agent,
            "request"
        );

        for (name, value) in &entry.request_headers {
            tracing::info!(request_id = %entry.request_id, header = %name, value = %value, "req.hdr");
        }
        for (name, value) in &entry.response_headers {
            tracing::info!(request_id = %entry.request_id, header = %name, value = %value, "res.hdr");
        }
    }
}

/// Middleware state: where entries go and how much they carry.
#[derive(Clone)]
pub struct RequestLogState {
    sink: Arc<dyn AccessLogSink>,
    verbose: bool,
}

impl RequestLogState {
    pub fn new(sink: Arc<dyn AccessLogSink>, verbose: bool) -> Self {
        Self { sink, verbose }
    }
}

/// Time the request, capture status and size, hand the entry to the sink.
///
/// The request id comes from `X-Request-ID` when present and is echoed back on
/// the response.
pub async fn log_requests(
    State(state): State<RequestLogState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();

    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| CorrelationId::new().short());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let user_agent = header_str(request.headers(), header::USER_AGENT).unwrap_or_default();
    let client_ip = client_ip(&request);
    let request_headers = if state.verbose {
        header_pairs(request.headers())
    } else {
        Vec::new()
    };

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .entry(REQUEST_ID_HEADER)
            .or_insert(value);
    }

    let entry = AccessLogEntry {
        request_id,
        method,
        path,
        status: response.status().as_u16(),
        bytes: body_len(&response),
        duration: start.elapsed(),
        client_ip,
        user_agent,
        request_headers,
        response_headers: if state.verbose {
            header_pairs(response.headers())
        } else {
            Vec::new()
        },
    };
    state.sink.record(&entry);

    response
}

/// First `X-Forwarded-For` hop, else the peer address, else `-`.
fn client_ip(request: &Request) -> String {
    if let Some(forwarded) = header_str(request.headers(), HeaderName::from_static("x-forwarded-for")) {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return first.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn body_len(response: &Response) -> u64 {
    header_str(response.headers(), header::CONTENT_LENGTH)
        .and_then(|v| v.parse().ok())
        .or_else(|| response.body().size_hint().exact())
        .unwrap_or(0)
}

fn header_str(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<binary>").to_string(),
            )
        })
        .collect()
}
