// ABOUTME: SQL dialect selection and the aggregation statements for each dialect
// ABOUTME: Keeps MySQL and SQLite differences (date formatting, LIKE concatenation, casts) in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use crate::config::DatabaseUrl;
use pyxis_core::models::AgeBracket;

/// SQL flavor of the connected store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    /// `SQLite` (development, tests)
    Sqlite,
    /// `MySQL` / `MariaDB` (production)
    MySql,
}

impl SqlDialect {
    /// Dialect implied by a database URL
    #[must_use]
    pub const fn for_url(url: &DatabaseUrl) -> Self {
        if url.is_sqlite() {
            Self::Sqlite
        } else {
            Self::MySql
        }
    }

    /// Expression formatting `column` as `YYYY-MM-DD HH:00`
    #[must_use]
    pub fn hour_bucket(self, column: &str) -> String {
        match self {
            Self::Sqlite => format!("strftime('%Y-%m-%d %H:00', {column})"),
            Self::MySql => format!("DATE_FORMAT({column}, '%Y-%m-%d %H:00')"),
        }
    }

    /// Expression extracting the two-digit hour of day from `column`
    #[must_use]
    pub fn hour_of_day(self, column: &str) -> String {
        match self {
            Self::Sqlite => format!("strftime('%H', {column})"),
            Self::MySql => format!("DATE_FORMAT({column}, '%H')"),
        }
    }

    /// Pattern wrapping one bound parameter in `%` wildcards
    #[must_use]
    pub const fn contains_param(self) -> &'static str {
        match self {
            Self::Sqlite => "'%' || ? || '%'",
            Self::MySql => "CONCAT('%', ?, '%')",
        }
    }

    /// Cast to a 64-bit integer
    #[must_use]
    pub fn integer(self, expr: &str) -> String {
        match self {
            Self::Sqlite => format!("CAST({expr} AS INTEGER)"),
            Self::MySql => format!("CAST({expr} AS SIGNED)"),
        }
    }

    /// Cast to a double
    #[must_use]
    pub fn real(self, expr: &str) -> String {
        match self {
            Self::Sqlite => format!("CAST({expr} AS REAL)"),
            Self::MySql => format!("CAST({expr} AS DOUBLE)"),
        }
    }

    /// Cast to text
    #[must_use]
    pub fn text(self, expr: &str) -> String {
        match self {
            Self::Sqlite => format!("CAST({expr} AS TEXT)"),
            Self::MySql => format!("CAST({expr} AS CHAR)"),
        }
    }
}

/// Prepared SQL text for every district query, rendered once per dialect
#[derive(Debug, Clone)]
pub struct DistrictQueries {
    /// Visitors per hour bucket, fuzzy location match
    pub hourly_flow: String,
    /// Bracket amounts per period, exact location match
    pub age_sales_amounts: String,
    /// Bracket counts per period, exact location match
    pub age_sales_counts: String,
    /// Shops per category, exact location match
    pub shop_category_counts: String,
    /// Busiest hour of day, fuzzy location match
    pub peak_hour: String,
    /// Most recent period's bracket amounts, fuzzy location match
    pub latest_age_sales: String,
    /// Most common category, fuzzy location match
    pub top_category: String,
}

impl DistrictQueries {
    /// Render every statement for `dialect`
    #[must_use]
    pub fn for_dialect(dialect: SqlDialect) -> Self {
        let like = format!("dong_name LIKE {}", dialect.contains_param());
        let visitors = dialect.integer("COALESCE(SUM(visitor), 0)");
        let shops = dialect.integer("COUNT(*)");
        let amount_columns = bracket_columns(dialect, "amount");
        let count_columns = bracket_columns(dialect, "count");
        let year_quarter = dialect.text("year_quarter");

        Self {
            hourly_flow: format!(
                "SELECT {bucket} AS hour, {visitors} AS visitor_sum \
                 FROM flow_population \
                 WHERE {like} AND measure_time IS NOT NULL \
                 GROUP BY hour \
                 ORDER BY hour ASC",
                bucket = dialect.hour_bucket("measure_time"),
            ),
            age_sales_amounts: format!(
                "SELECT {year_quarter} AS year_quarter, {amount_columns} \
                 FROM age_sales \
                 WHERE dong_name = ? \
                 ORDER BY year_quarter ASC"
            ),
            age_sales_counts: format!(
                "SELECT {year_quarter} AS year_quarter, {count_columns} \
                 FROM age_sales \
                 WHERE dong_name = ? \
                 ORDER BY year_quarter ASC"
            ),
            shop_category_counts: format!(
                "SELECT mid_category_name AS category, {shops} AS cnt \
                 FROM shop_info \
                 WHERE dong_name = ? AND mid_category_name IS NOT NULL \
                 GROUP BY mid_category_name \
                 ORDER BY cnt DESC, category ASC"
            ),
            peak_hour: format!(
                "SELECT {hour} AS hour_of_day, {visitors} AS visitor_total \
                 FROM flow_population \
                 WHERE {like} AND measure_time IS NOT NULL \
                 GROUP BY hour_of_day \
                 ORDER BY visitor_total DESC, hour_of_day ASC \
                 LIMIT 1",
                hour = dialect.hour_of_day("measure_time"),
            ),
            latest_age_sales: format!(
                "SELECT {year_quarter} AS year_quarter, {amount_columns} \
                 FROM age_sales \
                 WHERE {like} \
                 ORDER BY year_quarter DESC \
                 LIMIT 1"
            ),
            top_category: format!(
                "SELECT mid_category_name AS category, {shops} AS cnt \
                 FROM shop_info \
                 WHERE {like} AND mid_category_name IS NOT NULL \
                 GROUP BY mid_category_name \
                 ORDER BY cnt DESC, category ASC \
                 LIMIT 1"
            ),
        }
    }
}

/// `age_NN_<suffix>` select list in bracket order, nulls read as zero
fn bracket_columns(dialect: SqlDialect, suffix: &str) -> String {
    AgeBracket::ALL
        .iter()
        .map(|bracket| {
            let column = format!("{}_{suffix}", bracket.column_prefix());
            let value = format!("COALESCE({column}, 0)");
            let cast = if suffix == "amount" {
                dialect.real(&value)
            } else {
                dialect.integer(&value)
            };
            format!("{cast} AS {column}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}
