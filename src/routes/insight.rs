// ABOUTME: Strategy insight route handler
// ABOUTME: GET /insight/strategy combines three look-ups with a generated narrative
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

/// Insight routes
pub struct InsightRoutes;

impl InsightRoutes {
    /// Create all insight routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/insight/strategy", get(Self::handle_strategy))
            .with_state(resources)
    }

    async fn handle_strategy(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Query(params): Query<DongQuery>,
    ) -> Result<Response, AppError> {
        let result = resources
            .insight
            .compose(params.dong())
            .await
            .map_err(|e| with_request_id(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(result)).into_response())
    }
}
