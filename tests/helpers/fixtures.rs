// ABOUTME: Database, repository and text-generation fixtures for integration tests
// ABOUTME: Builds routers over temp SQLite stores, counting stubs and scripted providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use pyxis_store_info::config::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LlmConfig, RouteTimeoutConfig,
    ServerConfig,
};
use pyxis_store_info::database::seed::DistrictSeeder;
use pyxis_store_info::database::{Database, DistrictRepository, SqlDistrictRepository};
use pyxis_store_info::errors::{AppError, AppResult, ErrorCode};
use pyxis_store_info::llm::{Completion, CompletionRequest, LlmProvider};
use pyxis_store_info::location::LocationKey;
use pyxis_store_info::models::{
    AgeSalesAmountRecord, AgeSalesCountRecord, FlowRecord, PeakHour, ShopCategoryRecord,
};
use pyxis_store_info::server::{build_router, ServerResources};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Configuration for tests; nothing is read from the environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 8000,
        host: "127.0.0.1".to_owned(),
        api_prefix: "/api/v1".to_owned(),
        environment: Environment::Testing,
        database: DatabaseConfig::new(DatabaseUrl::Memory),
        llm: LlmConfig {
            api_key: Some("test-key".to_owned()),
            ..LlmConfig::default()
        },
        route_timeouts: RouteTimeoutConfig {
            database_timeout_secs: 5,
            llm_timeout_secs: 2,
            request_timeout_secs: 10,
        },
        cors: CorsConfig::default(),
        service_name: "pyxis-store-info-test".to_owned(),
    }
}

/// `SQLite` file in a temp directory with the district tables created
pub struct TestDatabase {
    _dir: TempDir,
    pub database: Database,
}

impl TestDatabase {
    /// Empty store
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let url = DatabaseUrl::SQLite {
            path: dir.path().join("district.db"),
        };
        let database = Database::connect(&DatabaseConfig::new(url))
            .await
            .expect("connect test database");
        database
            .create_dev_schema()
            .await
            .expect("create schema");
        Self {
            _dir: dir,
            database,
        }
    }

    pub fn seeder(&self) -> DistrictSeeder<'_> {
        DistrictSeeder::new(&self.database)
    }

    pub fn repository(&self) -> Arc<dyn DistrictRepository> {
        Arc::new(SqlDistrictRepository::new(
            self.database.clone(),
            Duration::from_secs(5),
        ))
    }
}

/// Router over `repository`, with `llm` as the text-generation provider
pub fn app(repository: Arc<dyn DistrictRepository>, llm: Option<Arc<dyn LlmProvider>>) -> Router {
    let config = test_config();
    let resources = Arc::new(ServerResources::new(repository, llm, &config));
    build_router(resources, &config)
}

/// Router over a real database, with readiness checks wired to it
pub fn app_with_database(db: &TestDatabase, llm: Option<Arc<dyn LlmProvider>>) -> Router {
    let config = test_config();
    let resources =
        ServerResources::new(db.repository(), llm, &config).with_database(db.database.clone());
    build_router(Arc::new(resources), &config)
}

/// Scripted provider that records every request it receives
pub struct ScriptedLlm {
    outcome: Result<String, ErrorCode>,
    delay: Option<Duration>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlm {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(text.to_owned()),
            delay: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(code),
            delay: None,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn stalling(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok("too late".to_owned()),
            delay: Some(delay),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.prompt).collect()
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlm {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> AppResult<Completion> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.outcome {
            Ok(text) => Ok(Completion {
                text: text.clone(),
                model: request
                    .model
                    .clone()
                    .unwrap_or_else(|| "scripted-model".to_owned()),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(code) => Err(AppError::new(*code, "scripted failure")),
        }
    }
}

/// Repository that counts calls and answers with empty results or a fixed error
#[derive(Default)]
pub struct CountingRepository {
    calls: AtomicUsize,
    fail_with: Option<ErrorCode>,
}

impl CountingRepository {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail_with: Some(code),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T>(&self, empty: T) -> AppResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(code) => Err(AppError::new(code, "store unavailable")),
            None => Ok(empty),
        }
    }
}

#[async_trait]
impl DistrictRepository for CountingRepository {
    async fn hourly_flow(&self, _location: &LocationKey) -> AppResult<Vec<FlowRecord>> {
        self.answer(Vec::new())
    }

    async fn age_sales_amounts(
        &self,
        _location: &LocationKey,
    ) -> AppResult<Vec<AgeSalesAmountRecord>> {
        self.answer(Vec::new())
    }

    async fn age_sales_counts(
        &self,
        _location: &LocationKey,
    ) -> AppResult<Vec<AgeSalesCountRecord>> {
        self.answer(Vec::new())
    }

    async fn shop_category_counts(
        &self,
        _location: &LocationKey,
    ) -> AppResult<Vec<ShopCategoryRecord>> {
        self.answer(Vec::new())
    }

    async fn peak_hour(&self, _location: &LocationKey) -> AppResult<Option<PeakHour>> {
        self.answer(None)
    }

    async fn latest_age_sales(
        &self,
        _location: &LocationKey,
    ) -> AppResult<Option<AgeSalesAmountRecord>> {
        self.answer(None)
    }

    async fn top_category(&self, _location: &LocationKey) -> AppResult<Option<ShopCategoryRecord>> {
        self.answer(None)
    }
}
