// ABOUTME: Route module organization for the Pyxis Store Info HTTP endpoints
// ABOUTME: One router per domain plus the shared location query and request ID helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Route module for Pyxis Store Info
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the service layer.

/// Hourly foot-traffic routes
pub mod flow;
/// Health and readiness routes
pub mod health;
/// Strategy insight routes
pub mod insight;
/// Age-segmented sales routes
pub mod sales;
/// Shop category routes
pub mod shop;

pub use flow::FlowRoutes;
pub use health::HealthRoutes;
pub use insight::InsightRoutes;
pub use sales::SalesRoutes;
pub use shop::ShopRoutes;

use crate::middleware::RequestId;
use axum::Extension;
use pyxis_core::errors::AppError;
use serde::Deserialize;

/// `?dong=` query shared by every data endpoint
///
/// The field is optional so a missing parameter reaches our own validation
/// and yields the standard error envelope instead of an extractor rejection.
#[derive(Debug, Deserialize, Default)]
pub struct DongQuery {
    #[serde(default)]
    dong: Option<String>,
}

impl DongQuery {
    /// Raw parameter value, if present
    #[must_use]
    pub fn dong(&self) -> Option<&str> {
        self.dong.as_deref()
    }
}

/// Tag an error with the request's correlation ID when one is available
fn with_request_id(error: AppError, request_id: Option<&Extension<RequestId>>) -> AppError {
    match request_id {
        Some(Extension(id)) => error.with_request_id(id.as_str()),
        None => error,
    }
}
