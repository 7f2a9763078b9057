// ABOUTME: Conversion from sqlx errors into the unified AppError taxonomy
// ABOUTME: Distinguishes pool timeouts and connectivity loss from query failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::{AppError, ErrorCode};

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        let code = match &error {
            sqlx::Error::PoolTimedOut => ErrorCode::DatabaseTimeout,
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                ErrorCode::DatabaseUnavailable
            }
            _ => ErrorCode::DatabaseError,
        };
        // Driver text stays in `source` for the logs, never in the client message
        let message = match code {
            ErrorCode::DatabaseTimeout => "Timed out waiting for a database connection",
            ErrorCode::DatabaseUnavailable => "Database connection failed",
            _ => "Database query failed",
        };
        Self::new(code, message).with_source(error)
    }
}
