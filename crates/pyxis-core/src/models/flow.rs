// ABOUTME: Foot-traffic records aggregated per hour
// ABOUTME: Hourly visitor sums and the peak hour-of-day summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use crate::constants::HOUR_LABEL_SUFFIX;
use serde::{Deserialize, Serialize};

/// Visitor total for one hour bucket (`YYYY-MM-DD HH:00`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Timestamp truncated to the hour
    pub hour: String,
    /// Sum of visitors measured within the hour
    pub visitor_sum: i64,
}

/// Hour of day with the highest summed visitor count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHour {
    /// Hour of day, 0-23
    pub hour_of_day: u8,
    /// Visitors summed over every day for that hour
    pub visitor_total: i64,
}

impl PeakHour {
    /// Display label used in insight responses (`18시`)
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:02}{HOUR_LABEL_SUFFIX}", self.hour_of_day)
    }
}
