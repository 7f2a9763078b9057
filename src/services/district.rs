// ABOUTME: Aggregation look-ups for hourly flow, age sales and shop categories
// ABOUTME: Validates the location key and wraps repository rows in the response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use crate::database::DistrictRepository;
use crate::location::{LocationKey, MatchPolicy};
use pyxis_core::errors::AppResult;
use pyxis_core::models::{
    AgeSalesAmountRecord, AgeSalesCountRecord, DistrictData, FlowRecord, ShopCategoryRecord,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Runs the four stateless aggregation handlers
#[derive(Clone)]
pub struct DistrictStatsService {
    repository: Arc<dyn DistrictRepository>,
}

impl DistrictStatsService {
    /// Service reading through `repository`
    #[must_use]
    pub fn new(repository: Arc<dyn DistrictRepository>) -> Self {
        Self { repository }
    }

    /// Visitors per hour bucket, ascending, matched by substring
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a missing or blank location, or a
    /// dependency failure if the store query fails
    #[instrument(skip(self))]
    pub async fn hourly_flow(&self, raw: Option<&str>) -> AppResult<DistrictData<FlowRecord>> {
        let location = LocationKey::parse(raw)?;
        let rows = self.repository.hourly_flow(&location).await?;
        debug!(rows = rows.len(), "hourly flow");
        Ok(DistrictData::new(location.for_policy(MatchPolicy::Fuzzy), rows))
    }

    /// Bracket sales amounts per period, ascending, matched exactly
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a missing or blank location, or a
    /// dependency failure if the store query fails
    #[instrument(skip(self))]
    pub async fn age_sales(
        &self,
        raw: Option<&str>,
    ) -> AppResult<DistrictData<AgeSalesAmountRecord>> {
        let location = LocationKey::parse(raw)?;
        let rows = self.repository.age_sales_amounts(&location).await?;
        debug!(rows = rows.len(), "age sales amounts");
        Ok(DistrictData::new(location.for_policy(MatchPolicy::Exact), rows))
    }

    /// Bracket transaction counts per period, ascending, matched exactly
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a missing or blank location, or a
    /// dependency failure if the store query fails
    #[instrument(skip(self))]
    pub async fn age_sales_count(
        &self,
        raw: Option<&str>,
    ) -> AppResult<DistrictData<AgeSalesCountRecord>> {
        let location = LocationKey::parse(raw)?;
        let rows = self.repository.age_sales_counts(&location).await?;
        debug!(rows = rows.len(), "age sales counts");
        Ok(DistrictData::new(location.for_policy(MatchPolicy::Exact), rows))
    }

    /// Shops per category, descending by count, matched exactly
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a missing or blank location, or a
    /// dependency failure if the store query fails
    #[instrument(skip(self))]
    pub async fn shop_count(
        &self,
        raw: Option<&str>,
    ) -> AppResult<DistrictData<ShopCategoryRecord>> {
        let location = LocationKey::parse(raw)?;
        let rows = self.repository.shop_category_counts(&location).await?;
        debug!(rows = rows.len(), "shop categories");
        Ok(DistrictData::new(location.for_policy(MatchPolicy::Exact), rows))
    }
}
