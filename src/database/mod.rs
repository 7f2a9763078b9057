// ABOUTME: Connection pool lifecycle for the commercial district store
// ABOUTME: Opens MySQL or SQLite through the sqlx any driver and exposes readiness and dev schema helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # Database Management
//!
//! The store is external and read-only from the API's point of view. This
//! module owns the connection pool, picks the SQL dialect from the URL, and
//! hands out the [`SqlDistrictRepository`] that runs the aggregation queries.
//! Each query borrows one pooled connection for its duration; sqlx returns it
//! to the pool on every exit path.

mod dialect;
mod repository;
/// Demo data loading for development databases
pub mod seed;

pub use dialect::{DistrictQueries, SqlDialect};
pub use repository::{DistrictRepository, SqlDistrictRepository};

use crate::config::DatabaseConfig;
use pyxis_core::errors::{AppError, AppResult};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use tracing::{debug, info};

/// Database handle shared by every request
#[derive(Clone, Debug)]
pub struct Database {
    pool: AnyPool,
    dialect: SqlDialect,
}

impl Database {
    /// Open a pool for the configured store
    ///
    /// In-memory `SQLite` is limited to a single long-lived connection since
    /// every connection would otherwise see its own empty database.
    ///
    /// # Errors
    ///
    /// Returns a dependency failure if the first connection cannot be established
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        sqlx::any::install_default_drivers();

        let dialect = SqlDialect::for_url(&config.url);
        let options = if config.url.is_memory() {
            AnyPoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            AnyPoolOptions::new()
                .min_connections(config.pool.min_connections())
                .max_connections(config.pool.max_connections())
                .max_lifetime(config.pool.max_lifetime())
        };

        let pool = options
            .acquire_timeout(config.pool.acquire_timeout())
            .connect(&config.url.to_connection_string())
            .await?;

        info!(
            database = %config.url.redacted(),
            dialect = ?dialect,
            max_connections = config.pool.max_connections(),
            "Database pool ready"
        );

        Ok(Self { pool, dialect })
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Dialect of the connected store
    #[must_use]
    pub const fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    /// Round-trip a trivial query to prove the store is reachable
    ///
    /// # Errors
    ///
    /// Returns a dependency failure if no connection is available
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection, waiting for in-flight queries
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    /// Create the district tables in a development `SQLite` database
    ///
    /// Production tables are owned by the data pipeline and never created here.
    ///
    /// # Errors
    ///
    /// Returns a config error when connected to `MySQL`, or a database error
    /// if a statement fails
    pub async fn create_dev_schema(&self) -> AppResult<()> {
        if self.dialect != SqlDialect::Sqlite {
            return Err(AppError::config(
                "Development schema can only be created in SQLite",
            ));
        }

        self.migrate_flow_population().await?;
        self.migrate_age_sales().await?;
        self.migrate_shop_info().await?;
        debug!("Development schema ready");
        Ok(())
    }

    async fn migrate_flow_population(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS flow_population (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dong_name TEXT NOT NULL,
                measure_time TEXT NOT NULL,
                visitor INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_flow_population_dong ON flow_population(dong_name)",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn migrate_age_sales(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS age_sales (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dong_name TEXT NOT NULL,
                year_quarter TEXT NOT NULL,
                age_10_amount REAL NOT NULL DEFAULT 0,
                age_20_amount REAL NOT NULL DEFAULT 0,
                age_30_amount REAL NOT NULL DEFAULT 0,
                age_40_amount REAL NOT NULL DEFAULT 0,
                age_50_amount REAL NOT NULL DEFAULT 0,
                age_60_amount REAL NOT NULL DEFAULT 0,
                age_10_count INTEGER NOT NULL DEFAULT 0,
                age_20_count INTEGER NOT NULL DEFAULT 0,
                age_30_count INTEGER NOT NULL DEFAULT 0,
                age_40_count INTEGER NOT NULL DEFAULT 0,
                age_50_count INTEGER NOT NULL DEFAULT 0,
                age_60_count INTEGER NOT NULL DEFAULT 0
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_age_sales_dong ON age_sales(dong_name)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn migrate_shop_info(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS shop_info (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dong_name TEXT NOT NULL,
                mid_category_name TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_shop_info_dong ON shop_info(dong_name)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
