// ABOUTME: Shop counts grouped by mid-level business category
// ABOUTME: Rows are ordered by count descending with category as the tie-breaker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use serde::{Deserialize, Serialize};

/// Number of shops registered under one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCategoryRecord {
    /// Mid-level category name
    pub category: String,
    /// Shop count
    pub cnt: i64,
}
