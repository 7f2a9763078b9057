// ABOUTME: Inserts district rows into a development database
// ABOUTME: Used by the seed binary for demo data and by tests for fixture databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::Database;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use pyxis_core::errors::{AppError, AppResult};
use tracing::info;

/// One `age_sales` row: amounts and counts for six brackets in bracket order
#[derive(Debug, Clone, PartialEq)]
pub struct AgeSalesSeed {
    /// Reporting period, e.g. `20241`
    pub year_quarter: String,
    /// Amounts, teens first
    pub amounts: [f64; 6],
    /// Transaction counts, teens first
    pub counts: [i64; 6],
}

/// Summary of what a seeding run inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// `flow_population` rows
    pub flow_rows: u64,
    /// `age_sales` rows
    pub age_sales_rows: u64,
    /// `shop_info` rows
    pub shop_rows: u64,
}

/// Writes district rows through an open [`Database`]
pub struct DistrictSeeder<'a> {
    db: &'a Database,
}

impl<'a> DistrictSeeder<'a> {
    /// Seeder writing to `db`
    #[must_use]
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert one foot-traffic measurement (`measure_time` as `YYYY-MM-DD HH:MM:SS`)
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_flow(&self, dong: &str, measure_time: &str, visitor: i64) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO flow_population (dong_name, measure_time, visitor) VALUES (?, ?, ?)",
        )
        .bind(dong.to_owned())
        .bind(measure_time.to_owned())
        .bind(visitor)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Insert one quarterly age sales row
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_age_sales(&self, dong: &str, row: &AgeSalesSeed) -> AppResult<()> {
        let [a10, a20, a30, a40, a50, a60] = row.amounts;
        let [c10, c20, c30, c40, c50, c60] = row.counts;
        sqlx::query(
            r"
            INSERT INTO age_sales (
                dong_name, year_quarter,
                age_10_amount, age_20_amount, age_30_amount,
                age_40_amount, age_50_amount, age_60_amount,
                age_10_count, age_20_count, age_30_count,
                age_40_count, age_50_count, age_60_count
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(dong.to_owned())
        .bind(row.year_quarter.clone())
        .bind(a10)
        .bind(a20)
        .bind(a30)
        .bind(a40)
        .bind(a50)
        .bind(a60)
        .bind(c10)
        .bind(c20)
        .bind(c30)
        .bind(c40)
        .bind(c50)
        .bind(c60)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Insert one shop registration
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails
    pub async fn insert_shop(&self, dong: &str, category: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO shop_info (dong_name, mid_category_name) VALUES (?, ?)")
            .bind(dong.to_owned())
            .bind(category.to_owned())
            .execute(self.db.pool())
            .await?;
        Ok(())
    }

    /// Delete every row from the three district tables
    ///
    /// # Errors
    ///
    /// Returns an error if a delete fails
    pub async fn reset(&self) -> AppResult<()> {
        for table in ["flow_population", "age_sales", "shop_info"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(self.db.pool())
                .await?;
        }
        info!("District tables cleared");
        Ok(())
    }

    /// Load a deterministic demo dataset covering `days` days of hourly traffic
    ///
    /// # Errors
    ///
    /// Returns an error if an insert fails
    pub async fn load_demo(&self, days: u32) -> AppResult<SeedSummary> {
        let mut summary = SeedSummary::default();
        let start = demo_start()?;

        for (district_idx, district) in DEMO_DISTRICTS.iter().enumerate() {
            for day in 0..days {
                let date = start + Duration::days(i64::from(day));
                for hour in 0..24u32 {
                    let time = NaiveTime::from_hms_opt(hour, 0, 0)
                        .ok_or_else(|| AppError::internal("invalid demo hour"))?;
                    let measured = NaiveDateTime::new(date, time);
                    let visitor = demo_visitors(district_idx, day, hour);
                    self.insert_flow(
                        district.name,
                        &measured.format("%Y-%m-%d %H:%M:%S").to_string(),
                        visitor,
                    )
                    .await?;
                    summary.flow_rows += 1;
                }
            }

            for (quarter_idx, year_quarter) in ["20233", "20234", "20241", "20242"].iter().enumerate()
            {
                let row = demo_age_sales(district, year_quarter, quarter_idx);
                self.insert_age_sales(district.name, &row).await?;
                summary.age_sales_rows += 1;
            }

            for (category, count) in district.shops {
                for _ in 0..*count {
                    self.insert_shop(district.name, category).await?;
                    summary.shop_rows += 1;
                }
            }
        }

        info!(
            flow_rows = summary.flow_rows,
            age_sales_rows = summary.age_sales_rows,
            shop_rows = summary.shop_rows,
            "Demo district data loaded"
        );
        Ok(summary)
    }
}

struct DemoDistrict {
    name: &'static str,
    peak_hour: u32,
    dominant_bracket: usize,
    shops: &'static [(&'static str, u32)],
}

const DEMO_DISTRICTS: [DemoDistrict; 3] = [
    DemoDistrict {
        name: "역삼1동",
        peak_hour: 18,
        dominant_bracket: 2,
        shops: &[("한식", 12), ("커피전문점", 9), ("편의점", 4)],
    },
    DemoDistrict {
        name: "서교동",
        peak_hour: 21,
        dominant_bracket: 1,
        shops: &[("주점", 11), ("커피전문점", 10), ("의류", 6)],
    },
    DemoDistrict {
        name: "명동",
        peak_hour: 14,
        dominant_bracket: 3,
        shops: &[("화장품", 15), ("한식", 8), ("의류", 8)],
    },
];

fn demo_start() -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 5, 1).ok_or_else(|| AppError::internal("invalid demo start date"))
}

/// Traffic rises toward the district's peak hour and varies a little by day
fn demo_visitors(district_idx: usize, day: u32, hour: u32) -> i64 {
    let peak = DEMO_DISTRICTS[district_idx].peak_hour;
    let distance = i64::from(peak.abs_diff(hour));
    let base = 400 - distance * 30;
    let jitter = i64::from((day * 7 + hour * 3) % 25);
    (base + jitter).max(20)
}

fn demo_age_sales(district: &DemoDistrict, year_quarter: &str, quarter_idx: usize) -> AgeSalesSeed {
    let growth = (quarter_idx as f64).mul_add(0.05, 1.0);
    let weights: Vec<f64> = (0..6)
        .map(|bracket| {
            if bracket == district.dominant_bracket {
                5.0
            } else {
                (bracket as f64).mul_add(0.3, 1.0)
            }
        })
        .collect();

    let mut amounts = [0.0; 6];
    let mut counts = [0; 6];
    for ((amount, count), weight) in amounts.iter_mut().zip(counts.iter_mut()).zip(&weights) {
        *amount = (weight * 1_000_000.0 * growth).round();
        *count = (weight * 120.0 * growth).round() as i64;
    }

    AgeSalesSeed {
        year_quarter: year_quarter.to_owned(),
        amounts,
        counts,
    }
}
