// ABOUTME: Domain service layer between the HTTP routes and the store and text-generation collaborators
// ABOUTME: Validates the location key, runs aggregation queries and composes the strategy insight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Domain service layer
//!
//! Services own input validation and result assembly so route handlers stay
//! thin. Every operation validates the location before touching the store.

/// The four aggregation look-ups
pub mod district;

/// Strategy insight composition
pub mod insight;

pub use district::DistrictStatsService;
pub use insight::InsightComposer;
