//! Panic recovery
//!
//! Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic is
//! logged with a backtrace and the client only sees a generic 500.

use std::any::Any;
use std::backtrace::Backtrace;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        panic = %message,
        backtrace = %Backtrace::force_capture(),
        "Request handler panicked"
    );

    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
