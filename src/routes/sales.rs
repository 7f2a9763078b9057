// ABOUTME: Age-segmented sales route handlers
// ABOUTME: GET /sales/age and /sales/age-count return per-quarter bracket amounts and counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::{with_request_id, DongQuery};
use crate::middleware::RequestId;
use crate::server::ServerResources;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use pyxis_core::errors::AppError;
use std::sync::Arc;

/// Sales routes
pub struct SalesRoutes;

impl SalesRoutes {
    /// Create all sales routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/sales/age", get(Self::handle_age_amounts))
            .route("/sales/age-count", get(Self::handle_age_counts))
            .with_state(resources)
    }

    async fn handle_age_amounts(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Query(params): Query<DongQuery>,
    ) -> Result<Response, AppError> {
        let data = resources
            .district
            .age_sales(params.dong())
            .await
            .map_err(|e| with_request_id(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(data)).into_response())
    }

    async fn handle_age_counts(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Query(params): Query<DongQuery>,
    ) -> Result<Response, AppError> {
        let data = resources
            .district
            .age_sales_count(params.dong())
            .await
            .map_err(|e| with_request_id(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(data)).into_response())
    }
}
