// ABOUTME: Request tracing spans for structured logging
// ABOUTME: Creates one span per HTTP request carrying method, path and request ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::request_id::REQUEST_ID_HEADER;
use axum::extract::Request;
use tracing::Span;

/// Span for one HTTP request, used as the `TraceLayer` span factory
pub fn create_request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        status_code = tracing::field::Empty,
    )
}
