// ABOUTME: Repository trait for the district aggregation queries and its SQL implementation
// ABOUTME: Maps result rows into flow, age sales and shop category records under a per-query timeout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::{Database, DistrictQueries};
use crate::location::LocationKey;
use crate::utils::route_timeout::with_database_timeout;
use async_trait::async_trait;
use pyxis_core::errors::{AppError, AppResult};
use pyxis_core::models::{
    AgeSalesAmountRecord, AgeSalesCountRecord, FlowRecord, PeakHour, ShopCategoryRecord,
};
use sqlx::any::AnyRow;
use sqlx::Row;
use std::time::Duration;
use tracing::{debug, instrument};

/// Read access to the commercial district store
///
/// Implementations decide the match policy per query: hourly flow and the
/// three insight look-ups match the whitespace-free key as a substring, the
/// sales and shop listings match the trimmed key exactly.
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// Visitors summed per hour bucket, ascending by hour
    async fn hourly_flow(&self, location: &LocationKey) -> AppResult<Vec<FlowRecord>>;

    /// Bracket amounts per period, ascending by period
    async fn age_sales_amounts(&self, location: &LocationKey)
        -> AppResult<Vec<AgeSalesAmountRecord>>;

    /// Bracket transaction counts per period, ascending by period
    async fn age_sales_counts(&self, location: &LocationKey)
        -> AppResult<Vec<AgeSalesCountRecord>>;

    /// Shops per category, descending by count
    async fn shop_category_counts(&self, location: &LocationKey)
        -> AppResult<Vec<ShopCategoryRecord>>;

    /// Busiest hour of day, `None` when no flow rows match
    async fn peak_hour(&self, location: &LocationKey) -> AppResult<Option<PeakHour>>;

    /// Most recent period's bracket amounts, `None` when no sales rows match
    async fn latest_age_sales(&self, location: &LocationKey)
        -> AppResult<Option<AgeSalesAmountRecord>>;

    /// Most common shop category, `None` when no shop rows match
    async fn top_category(&self, location: &LocationKey) -> AppResult<Option<ShopCategoryRecord>>;
}

/// `DistrictRepository` backed by the sqlx pool
#[derive(Clone, Debug)]
pub struct SqlDistrictRepository {
    db: Database,
    queries: DistrictQueries,
    query_timeout: Duration,
}

impl SqlDistrictRepository {
    /// Create a repository whose queries each run within `query_timeout`
    #[must_use]
    pub fn new(db: Database, query_timeout: Duration) -> Self {
        let queries = DistrictQueries::for_dialect(db.dialect());
        Self {
            db,
            queries,
            query_timeout,
        }
    }

    async fn fetch_all(&self, sql: &str, key: &str) -> AppResult<Vec<AnyRow>> {
        with_database_timeout(
            self.query_timeout,
            sqlx::query(sql).bind(key.to_owned()).fetch_all(self.db.pool()),
        )
        .await
    }

    async fn fetch_optional(&self, sql: &str, key: &str) -> AppResult<Option<AnyRow>> {
        with_database_timeout(
            self.query_timeout,
            sqlx::query(sql)
                .bind(key.to_owned())
                .fetch_optional(self.db.pool()),
        )
        .await
    }
}

#[async_trait]
impl DistrictRepository for SqlDistrictRepository {
    #[instrument(skip(self, location), fields(dong = %location.fuzzy()))]
    async fn hourly_flow(&self, location: &LocationKey) -> AppResult<Vec<FlowRecord>> {
        let rows = self
            .fetch_all(&self.queries.hourly_flow, location.fuzzy())
            .await?;
        debug!(rows = rows.len(), "Hourly flow fetched");
        map_rows(&rows, flow_from_row)
    }

    #[instrument(skip(self, location), fields(dong = %location.exact()))]
    async fn age_sales_amounts(
        &self,
        location: &LocationKey,
    ) -> AppResult<Vec<AgeSalesAmountRecord>> {
        let rows = self
            .fetch_all(&self.queries.age_sales_amounts, location.exact())
            .await?;
        debug!(rows = rows.len(), "Age sales amounts fetched");
        map_rows(&rows, amounts_from_row)
    }

    #[instrument(skip(self, location), fields(dong = %location.exact()))]
    async fn age_sales_counts(
        &self,
        location: &LocationKey,
    ) -> AppResult<Vec<AgeSalesCountRecord>> {
        let rows = self
            .fetch_all(&self.queries.age_sales_counts, location.exact())
            .await?;
        debug!(rows = rows.len(), "Age sales counts fetched");
        map_rows(&rows, counts_from_row)
    }

    #[instrument(skip(self, location), fields(dong = %location.exact()))]
    async fn shop_category_counts(
        &self,
        location: &LocationKey,
    ) -> AppResult<Vec<ShopCategoryRecord>> {
        let rows = self
            .fetch_all(&self.queries.shop_category_counts, location.exact())
            .await?;
        debug!(rows = rows.len(), "Shop categories fetched");
        map_rows(&rows, category_from_row)
    }

    #[instrument(skip(self, location), fields(dong = %location.fuzzy()))]
    async fn peak_hour(&self, location: &LocationKey) -> AppResult<Option<PeakHour>> {
        let row = self
            .fetch_optional(&self.queries.peak_hour, location.fuzzy())
            .await?;
        row.as_ref().map(peak_from_row).transpose()
    }

    #[instrument(skip(self, location), fields(dong = %location.fuzzy()))]
    async fn latest_age_sales(
        &self,
        location: &LocationKey,
    ) -> AppResult<Option<AgeSalesAmountRecord>> {
        let row = self
            .fetch_optional(&self.queries.latest_age_sales, location.fuzzy())
            .await?;
        Ok(row.as_ref().map(amounts_from_row).transpose()?)
    }

    #[instrument(skip(self, location), fields(dong = %location.fuzzy()))]
    async fn top_category(&self, location: &LocationKey) -> AppResult<Option<ShopCategoryRecord>> {
        let row = self
            .fetch_optional(&self.queries.top_category, location.fuzzy())
            .await?;
        Ok(row.as_ref().map(category_from_row).transpose()?)
    }
}

fn map_rows<T>(rows: &[AnyRow], map: fn(&AnyRow) -> Result<T, sqlx::Error>) -> AppResult<Vec<T>> {
    rows.iter()
        .map(map)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::from)
}

fn flow_from_row(row: &AnyRow) -> Result<FlowRecord, sqlx::Error> {
    Ok(FlowRecord {
        hour: row.try_get("hour")?,
        visitor_sum: row.try_get("visitor_sum")?,
    })
}

fn amounts_from_row(row: &AnyRow) -> Result<AgeSalesAmountRecord, sqlx::Error> {
    Ok(AgeSalesAmountRecord {
        year_quarter: row.try_get("year_quarter")?,
        age_10_amount: row.try_get("age_10_amount")?,
        age_20_amount: row.try_get("age_20_amount")?,
        age_30_amount: row.try_get("age_30_amount")?,
        age_40_amount: row.try_get("age_40_amount")?,
        age_50_amount: row.try_get("age_50_amount")?,
        age_60_amount: row.try_get("age_60_amount")?,
    })
}

fn counts_from_row(row: &AnyRow) -> Result<AgeSalesCountRecord, sqlx::Error> {
    Ok(AgeSalesCountRecord {
        year_quarter: row.try_get("year_quarter")?,
        age_10_count: row.try_get("age_10_count")?,
        age_20_count: row.try_get("age_20_count")?,
        age_30_count: row.try_get("age_30_count")?,
        age_40_count: row.try_get("age_40_count")?,
        age_50_count: row.try_get("age_50_count")?,
        age_60_count: row.try_get("age_60_count")?,
    })
}

fn category_from_row(row: &AnyRow) -> Result<ShopCategoryRecord, sqlx::Error> {
    Ok(ShopCategoryRecord {
        category: row.try_get("category")?,
        cnt: row.try_get("cnt")?,
    })
}

fn peak_from_row(row: &AnyRow) -> AppResult<PeakHour> {
    let hour: String = row.try_get("hour_of_day")?;
    let visitor_total: i64 = row.try_get("visitor_total")?;
    let hour_of_day = hour
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| AppError::database(format!("Store returned invalid hour of day: {hour}")))?;

    Ok(PeakHour {
        hour_of_day,
        visitor_total,
    })
}
