// ABOUTME: District statistics record types returned by the API
// ABOUTME: Flow, age sales, shop category and insight records plus the common response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Record shapes projected from the commercial district store.
//!
//! All records are transient: they are built from query rows for a single
//! request and serialized straight into the HTTP response.

mod flow;
mod insight;
mod sales;
mod shop;

pub use flow::{FlowRecord, PeakHour};
pub use insight::InsightResult;
pub use sales::{AgeBracket, AgeSalesAmountRecord, AgeSalesCountRecord};
pub use shop::ShopCategoryRecord;

use serde::{Deserialize, Serialize};

/// Response envelope shared by the four aggregation endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictData<T> {
    /// Normalized location key the query ran with
    pub dong: String,
    /// Ordered result rows (empty when nothing matched)
    pub data: Vec<T>,
}

impl<T> DistrictData<T> {
    /// Wrap rows for a location
    #[must_use]
    pub fn new(dong: impl Into<String>, data: Vec<T>) -> Self {
        Self {
            dong: dong.into(),
            data,
        }
    }
}
