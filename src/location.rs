// ABOUTME: Normalizes the raw `dong` query parameter into exact and fuzzy match keys
// ABOUTME: Rejects missing or blank input before any query is issued
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use crate::constants::LOCATION_PARAM;
use pyxis_core::errors::{AppError, AppResult};
use std::fmt;

/// How a query matches the stored district name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// `dong_name = ?` against the trimmed input
    Exact,
    /// `dong_name LIKE %?%` against the input with all whitespace removed
    Fuzzy,
}

/// A validated location identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationKey {
    exact: String,
    fuzzy: String,
}

impl LocationKey {
    /// Validate and normalize a raw location string
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the parameter is absent and
    /// `InvalidInput` when it is empty or whitespace-only.
    pub fn parse(raw: Option<&str>) -> AppResult<Self> {
        let raw = raw.ok_or_else(|| AppError::missing_parameter(LOCATION_PARAM))?;
        let exact = raw.trim();
        if exact.is_empty() {
            return Err(AppError::invalid_input(format!(
                "{LOCATION_PARAM} parameter must not be blank"
            )));
        }
        let fuzzy: String = exact.chars().filter(|c| !c.is_whitespace()).collect();

        Ok(Self {
            exact: exact.to_owned(),
            fuzzy,
        })
    }

    /// Trimmed form used for equality matching
    #[must_use]
    pub fn exact(&self) -> &str {
        &self.exact
    }

    /// Whitespace-free form used for substring matching
    #[must_use]
    pub fn fuzzy(&self) -> &str {
        &self.fuzzy
    }

    /// Key for the given policy
    #[must_use]
    pub fn for_policy(&self, policy: MatchPolicy) -> &str {
        match policy {
            MatchPolicy::Exact => self.exact(),
            MatchPolicy::Fuzzy => self.fuzzy(),
        }
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.exact)
    }
}
