// ABOUTME: Hourly foot-traffic route handler
// ABOUTME: GET /flow/hourly returns visitor sums per hour bucket for a district
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

/// Flow routes
pub struct FlowRoutes;

impl FlowRoutes {
    /// Create all flow routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/flow/hourly", get(Self::handle_hourly))
            .with_state(resources)
    }

    async fn handle_hourly(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Query(params): Query<DongQuery>,
    ) -> Result<Response, AppError> {
        let data = resources
            .district
            .hourly_flow(params.dong())
            .await
            .map_err(|e| with_request_id(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(data)).into_response())
    }
}
