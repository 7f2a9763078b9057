// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness answers unconditionally; readiness pings the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Health check routes for service monitoring
//!
//! `/health` reports that the process is up. `/ready` additionally proves the
//! store is reachable, answering 503 when it is not.

use crate::server::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Json<serde_json::Value> {
        Json(json!({
            "status": "healthy",
            "service": resources.service_name,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        let database = match &resources.database {
            Some(db) => match db.ping().await {
                Ok(()) => "ok",
                Err(e) => {
                    warn!("Readiness check failed: {}", e);
                    "unavailable"
                }
            },
            None => "not_configured",
        };
        let text_generation = if resources.insight_enabled {
            "configured"
        } else {
            "not_configured"
        };

        let ready = database != "unavailable";
        let status = if ready {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        (
            status,
            Json(json!({
                "status": if ready { "ready" } else { "not_ready" },
                "checks": {
                    "database": database,
                    "text_generation": text_generation
                },
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
            .into_response()
    }
}
