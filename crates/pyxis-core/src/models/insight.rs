// ABOUTME: Combined structured facts and generated narrative for a district
// ABOUTME: Returned by the strategy insight endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use serde::{Deserialize, Serialize};

/// Strategy insight for one location
///
/// Each label is either a derived fact or the unknown sentinel when the
/// underlying look-up matched nothing. `insight` is the text returned by the
/// text-generation service, passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightResult {
    /// Normalized location key
    pub dong: String,
    /// Busiest hour label
    pub peak_hour: String,
    /// Age bracket with the highest sales in the latest period
    pub main_age: String,
    /// Most common shop category
    pub top_category: String,
    /// Generated narrative
    pub insight: String,
}
