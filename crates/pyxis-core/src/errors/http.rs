// ABOUTME: Axum IntoResponse implementation for AppError
// ABOUTME: Renders the JSON error envelope with the status code mapped from ErrorCode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{debug, error};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                code = ?self.code,
                status = status.as_u16(),
                request_id = self.request_id.as_deref().unwrap_or("-"),
                source = self.source.as_ref().map(ToString::to_string).as_deref().unwrap_or("-"),
                "Request failed: {}",
                self.message
            );
        } else {
            debug!(code = ?self.code, status = status.as_u16(), "Request rejected: {}", self.message);
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
