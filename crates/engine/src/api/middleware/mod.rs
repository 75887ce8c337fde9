//! HTTP middleware: access logging, panic recovery, CORS.

mod cors;
mod recover;
mod request_log;

pub use cors::build_cors_layer;
pub use recover::handle_panic;
pub use request_log::{
    log_requests, AccessLogEntry, AccessLogSink, RequestLogState, TracingAccessLog,
    REQUEST_ID_HEADER,
};

#[cfg(test)]
pub(crate) use request_log::tests::CapturingSink;
