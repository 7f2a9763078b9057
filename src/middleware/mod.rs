// ABOUTME: HTTP middleware for request IDs, tracing spans and CORS
// ABOUTME: Provides request ID generation, per-request spans and cross-origin configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

/// Cross-origin configuration
pub mod cors;
/// Request ID generation and propagation
pub mod request_id;
/// Per-request tracing spans
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use tracing::create_request_span;
