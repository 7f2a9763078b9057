// ABOUTME: Unified error type and error codes for the Pyxis Store Info API
// ABOUTME: Separates client input errors from dependency failures and maps both to HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # Unified Error Handling
//!
//! Every fallible operation in the API returns [`AppResult`]. Errors fall into
//! two classes that matter to callers:
//!
//! - **Invalid input**: the client supplied a missing or blank parameter. The
//!   request ends with a 4xx status and no query is issued.
//! - **Dependency failure**: the relational store or the text-generation
//!   service failed. The request ends with a 5xx status and nothing partial
//!   is returned.
//!
//! An empty query result is *not* an error and never flows through this type.

#[cfg(feature = "database-errors")]
mod database;
#[cfg(feature = "http-response")]
mod http;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Parameter present but unusable (blank, whitespace-only)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Required parameter absent from the request
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Relational store (4000-4999)
    /// Query failed inside the store (malformed SQL, decode failure)
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError = 4000,
    /// Store unreachable or the pool is closed
    #[serde(rename = "DATABASE_UNAVAILABLE")]
    DatabaseUnavailable = 4001,
    /// Pool acquisition or query exceeded its time budget
    #[serde(rename = "DATABASE_TIMEOUT")]
    DatabaseTimeout = 4002,

    // External services (5000-5999)
    /// External service returned an unexpected error status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// External service is down or returned 5xx
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// External service rejected our credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// External service quota or rate limit exhausted
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,
    /// External call did not finish in time
    #[serde(rename = "EXTERNAL_TIMEOUT")]
    ExternalTimeout = 5004,
    /// External service answered with a body we could not use
    #[serde(rename = "EXTERNAL_BAD_RESPONSE")]
    ExternalBadResponse = 5005,

    // Configuration (6000-6999)
    /// Configuration could not be parsed
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// A collaborator needs configuration that was not supplied
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,

    // Internal (9000-9999)
    /// Anything else
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,

            Self::ExternalServiceError | Self::ExternalAuthFailed | Self::ExternalBadResponse => {
                502
            }

            Self::DatabaseError
            | Self::DatabaseUnavailable
            | Self::DatabaseTimeout
            | Self::ExternalServiceUnavailable
            | Self::ExternalRateLimited
            | Self::ExternalTimeout
            | Self::ConfigMissing => 503,

            Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required parameter is missing from the request",
            Self::DatabaseError => "Database query failed",
            Self::DatabaseUnavailable => "Database is unavailable",
            Self::DatabaseTimeout => "Database operation timed out",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with external service failed",
            Self::ExternalRateLimited => "External service rate limit exceeded",
            Self::ExternalTimeout => "External service did not respond in time",
            Self::ExternalBadResponse => "External service returned an unusable response",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Whether this code belongs to the client input class
    #[must_use]
    pub const fn is_invalid_input(self) -> bool {
        matches!(self, Self::InvalidInput | Self::MissingRequiredField)
    }

    /// Whether this code belongs to the dependency failure class
    #[must_use]
    pub const fn is_dependency_failure(self) -> bool {
        matches!(
            self,
            Self::DatabaseError
                | Self::DatabaseUnavailable
                | Self::DatabaseTimeout
                | Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
                | Self::ExternalRateLimited
                | Self::ExternalTimeout
                | Self::ExternalBadResponse
                | Self::ConfigMissing
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional structured details (null when absent)
    pub details: serde_json::Value,
    /// Request ID for log correlation
    pub request_id: Option<String>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            request_id: None,
            source: None,
        }
    }

    /// Add a request ID to the error
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether the client caused this error
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        self.code.is_invalid_input()
    }

    /// Whether a downstream collaborator caused this error
    #[must_use]
    pub const fn is_dependency_failure(&self) -> bool {
        self.code.is_dependency_failure()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors for the errors this API actually raises
impl AppError {
    /// Required parameter missing
    #[must_use]
    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{name} parameter is required"),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Database query error
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Database timed out
    #[must_use]
    pub fn database_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseTimeout, message)
    }

    /// Database unreachable
    #[must_use]
    pub fn database_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseUnavailable, message)
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Request ID when one was attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Extra details
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.request_id,
                details: error.details,
            },
        }
    }
}
