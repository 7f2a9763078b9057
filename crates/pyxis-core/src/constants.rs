// ABOUTME: Label and parameter constants shared by every layer of the API
// ABOUTME: Holds the unknown sentinel, age bracket labels, and the location query parameter name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Constants for labels that appear in API responses and prompts.

/// Query parameter carrying the district identifier on every endpoint
pub const LOCATION_PARAM: &str = "dong";

/// Sentinel label used when a look-up matched zero rows
pub const UNKNOWN_LABEL: &str = "정보 없음";

/// Suffix appended to an hour-of-day to form the peak hour label (`18` -> `18시`)
pub const HOUR_LABEL_SUFFIX: &str = "시";

/// Age bracket labels in fixed bracket order
pub mod age_labels {
    /// Teens
    pub const AGE_10: &str = "10대";
    /// Twenties
    pub const AGE_20: &str = "20대";
    /// Thirties
    pub const AGE_30: &str = "30대";
    /// Forties
    pub const AGE_40: &str = "40대";
    /// Fifties
    pub const AGE_50: &str = "50대";
    /// Sixty and over
    pub const AGE_60_PLUS: &str = "60대 이상";
}
