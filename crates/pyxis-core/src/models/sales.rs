// ABOUTME: Quarterly sales records split across six customer age brackets
// ABOUTME: Amount and transaction-count projections plus dominant-bracket selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use crate::constants::age_labels;
use serde::{Deserialize, Serialize};

/// Customer age bracket, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 10-19
    Age10,
    /// 20-29
    Age20,
    /// 30-39
    Age30,
    /// 40-49
    Age40,
    /// 50-59
    Age50,
    /// 60 and over
    Age60Plus,
}

impl AgeBracket {
    /// Every bracket in reporting order
    pub const ALL: [Self; 6] = [
        Self::Age10,
        Self::Age20,
        Self::Age30,
        Self::Age40,
        Self::Age50,
        Self::Age60Plus,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age10 => age_labels::AGE_10,
            Self::Age20 => age_labels::AGE_20,
            Self::Age30 => age_labels::AGE_30,
            Self::Age40 => age_labels::AGE_40,
            Self::Age50 => age_labels::AGE_50,
            Self::Age60Plus => age_labels::AGE_60_PLUS,
        }
    }

    /// Column prefix in the `age_sales` table (`age_10`, ..., `age_60`)
    #[must_use]
    pub const fn column_prefix(self) -> &'static str {
        match self {
            Self::Age10 => "age_10",
            Self::Age20 => "age_20",
            Self::Age30 => "age_30",
            Self::Age40 => "age_40",
            Self::Age50 => "age_50",
            Self::Age60Plus => "age_60",
        }
    }
}

/// Sales amount per age bracket for one quarter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeSalesAmountRecord {
    /// Reporting period, e.g. `20241`
    pub year_quarter: String,
    /// Ages 10-19
    pub age_10_amount: f64,
    /// Ages 20-29
    pub age_20_amount: f64,
    /// Ages 30-39
    pub age_30_amount: f64,
    /// Ages 40-49
    pub age_40_amount: f64,
    /// Ages 50-59
    pub age_50_amount: f64,
    /// Ages 60 and over
    pub age_60_amount: f64,
}

impl AgeSalesAmountRecord {
    /// Amounts in [`AgeBracket::ALL`] order
    #[must_use]
    pub const fn amounts(&self) -> [f64; 6] {
        [
            self.age_10_amount,
            self.age_20_amount,
            self.age_30_amount,
            self.age_40_amount,
            self.age_50_amount,
            self.age_60_amount,
        ]
    }

    /// Bracket with the largest amount; the earliest bracket wins a tie
    #[must_use]
    pub fn dominant_bracket(&self) -> AgeBracket {
        let amounts = self.amounts();
        let mut best = 0;
        for (idx, amount) in amounts.iter().enumerate().skip(1) {
            if *amount > amounts[best] {
                best = idx;
            }
        }
        AgeBracket::ALL[best]
    }
}

/// Transaction count per age bracket for one quarter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeSalesCountRecord {
    /// Reporting period, e.g. `20241`
    pub year_quarter: String,
    /// Ages 10-19
    pub age_10_count: i64,
    /// Ages 20-29
    pub age_20_count: i64,
    /// Ages 30-39
    pub age_30_count: i64,
    /// Ages 40-49
    pub age_40_count: i64,
    /// Ages 50-59
    pub age_50_count: i64,
    /// Ages 60 and over
    pub age_60_count: i64,
}

impl AgeSalesCountRecord {
    /// Counts in [`AgeBracket::ALL`] order
    #[must_use]
    pub const fn counts(&self) -> [i64; 6] {
        [
            self.age_10_count,
            self.age_20_count,
            self.age_30_count,
            self.age_40_count,
            self.age_50_count,
            self.age_60_count,
        ]
    }

    /// Transactions across every bracket
    #[must_use]
    pub fn total(&self) -> i64 {
        self.counts().iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(values: [f64; 6]) -> AgeSalesAmountRecord {
        AgeSalesAmountRecord {
            year_quarter: "20241".into(),
            age_10_amount: values[0],
            age_20_amount: values[1],
            age_30_amount: values[2],
            age_40_amount: values[3],
            age_50_amount: values[4],
            age_60_amount: values[5],
        }
    }

    #[test]
    fn test_dominant_bracket_picks_largest() {
        let record = amounts([10.0, 20.0, 90.0, 40.0, 30.0, 5.0]);
        assert_eq!(record.dominant_bracket(), AgeBracket::Age30);
        assert_eq!(record.dominant_bracket().label(), "30대");
    }

    #[test]
    fn test_dominant_bracket_tie_prefers_earliest() {
        let record = amounts([1.0, 50.0, 10.0, 50.0, 0.0, 50.0]);
        assert_eq!(record.dominant_bracket(), AgeBracket::Age20);
    }

    #[test]
    fn test_dominant_bracket_all_zero_is_first() {
        let record = amounts([0.0; 6]);
        assert_eq!(record.dominant_bracket(), AgeBracket::Age10);
    }

    #[test]
    fn test_last_bracket_label() {
        let record = amounts([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(record.dominant_bracket().label(), "60대 이상");
    }

    #[test]
    fn test_count_total() {
        let record = AgeSalesCountRecord {
            year_quarter: "20241".into(),
            age_10_count: 1,
            age_20_count: 2,
            age_30_count: 3,
            age_40_count: 4,
            age_50_count: 5,
            age_60_count: 6,
        };
        assert_eq!(record.total(), 21);
    }
}
