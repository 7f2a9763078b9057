// ABOUTME: Shop category route handler
// ABOUTME: GET /shop/count returns shop counts per category, most common first
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

/// Shop routes
pub struct ShopRoutes;

impl ShopRoutes {
    /// Create all shop routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/shop/count", get(Self::handle_count))
            .with_state(resources)
    }

    async fn handle_count(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        Query(params): Query<DongQuery>,
    ) -> Result<Response, AppError> {
        let data = resources
            .district
            .shop_count(params.dong())
            .await
            .map_err(|e| with_request_id(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(data)).into_response())
    }
}
