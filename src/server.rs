// ABOUTME: Server resources, router assembly and the serve loop with graceful shutdown
// ABOUTME: Collaborators are created once at startup and handed to every route through shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # HTTP Server
//!
//! [`ServerResources`] holds the collaborators created at startup (database
//! pool, services, text-generation provider). [`build_router`] mounts the data
//! routes under the configured prefix and wraps them in the request ID,
//! tracing, CORS and timeout layers. [`run`] serves until Ctrl-C or SIGTERM and
//! then closes the pool.

use crate::config::ServerConfig;
use crate::database::{Database, DistrictRepository, SqlDistrictRepository};
use crate::llm::{LlmProvider, OpenAiCompatibleProvider};
use crate::middleware::{create_request_span, request_id_middleware, setup_cors};
use crate::routes::{FlowRoutes, HealthRoutes, InsightRoutes, SalesRoutes, ShopRoutes};
use crate::services::{DistrictStatsService, InsightComposer};
use anyhow::{Context, Result};
use axum::{http::StatusCode, middleware, Router};
use pyxis_core::errors::AppResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for every handler
pub struct ServerResources {
    /// Aggregation look-ups
    pub district: DistrictStatsService,
    /// Strategy insight composition
    pub insight: InsightComposer,
    /// Pool handle for readiness checks and shutdown; `None` with stub repositories
    pub database: Option<Database>,
    /// Whether a text-generation provider is configured
    pub insight_enabled: bool,
    /// Service name reported by `/health`
    pub service_name: String,
}

impl ServerResources {
    /// Assemble resources from already-built collaborators
    #[must_use]
    pub fn new(
        repository: Arc<dyn DistrictRepository>,
        llm: Option<Arc<dyn LlmProvider>>,
        config: &ServerConfig,
    ) -> Self {
        let insight_enabled = llm.is_some();
        let insight = InsightComposer::new(
            Arc::clone(&repository),
            llm,
            config.llm.model.clone(),
            Duration::from_secs(config.route_timeouts.llm_timeout_secs),
        );

        Self {
            district: DistrictStatsService::new(repository),
            insight,
            database: None,
            insight_enabled,
            service_name: config.service_name.clone(),
        }
    }

    /// Attach the pool used for readiness checks and shutdown
    #[must_use]
    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    /// Connect to the store and build every collaborator from configuration
    ///
    /// A missing text-generation key is not fatal: the server starts and the
    /// insight endpoint answers 503 until one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable or the HTTP client
    /// cannot be created
    pub async fn from_config(config: &ServerConfig) -> AppResult<Self> {
        let database = Database::connect(&config.database).await?;
        let repository: Arc<dyn DistrictRepository> = Arc::new(SqlDistrictRepository::new(
            database.clone(),
            Duration::from_secs(config.route_timeouts.database_timeout_secs),
        ));

        let llm: Option<Arc<dyn LlmProvider>> = if config.llm.api_key.is_some() {
            Some(Arc::new(OpenAiCompatibleProvider::from_llm_config(
                &config.llm,
            )?))
        } else {
            warn!("Text generation disabled: OPENAI_API_KEY is not set");
            None
        };

        Ok(Self::new(repository, llm, config).with_database(database))
    }
}

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>, config: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(FlowRoutes::routes(Arc::clone(&resources)))
        .merge(SalesRoutes::routes(Arc::clone(&resources)))
        .merge(ShopRoutes::routes(Arc::clone(&resources)))
        .merge(InsightRoutes::routes(Arc::clone(&resources)));

    let router = if config.api_prefix.is_empty() {
        api
    } else {
        Router::new().nest(&config.api_prefix, api)
    };

    router
        .merge(HealthRoutes::routes(resources))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.route_timeouts.request_timeout_secs),
        ))
        .layer(setup_cors(&config.cors))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Serve until a shutdown signal arrives, then close the pool
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: &ServerConfig, resources: Arc<ServerResources>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.http_port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on http://{}{}", addr, config.api_prefix);

    let app = build_router(Arc::clone(&resources), config);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    if let Some(database) = &resources.database {
        database.close().await;
    }
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
