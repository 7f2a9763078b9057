// ABOUTME: Demo data seeder for development SQLite databases
// ABOUTME: Creates the district tables and loads deterministic flow, sales and shop rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Demo data seeder for Pyxis Store Info.
//!
//! Usage:
//! ```bash
//! # Seed ./data/district.db with two weeks of hourly traffic
//! cargo run --bin seed-district-data -- --database-url sqlite://./data/district.db
//!
//! # Clear existing rows first
//! cargo run --bin seed-district-data -- --database-url sqlite://./data/district.db --reset
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pyxis_store_info::config::{DatabaseConfig, DatabaseUrl};
use pyxis_store_info::database::seed::DistrictSeeder;
use pyxis_store_info::database::Database;
use pyxis_store_info::logging::LoggingConfig;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-district-data",
    about = "Pyxis Store Info Demo Data Seeder",
    long_about = "Create the district tables in a SQLite database and load demo rows"
)]
struct SeedArgs {
    /// Database URL (defaults to `DATABASE_URL`)
    #[arg(long)]
    database_url: Option<String>,

    /// Delete existing district rows before seeding
    #[arg(long)]
    reset: bool,

    /// Number of days of hourly traffic to generate
    #[arg(long, default_value = "14")]
    days: u32,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    LoggingConfig {
        level: if args.verbose { "debug" } else { "info" }.to_owned(),
        ..LoggingConfig::default()
    }
    .init()?;

    let raw_url = match args.database_url {
        Some(url) => url,
        None => {
            dotenvy::dotenv().ok();
            env::var("DATABASE_URL").context("Pass --database-url or set DATABASE_URL")?
        }
    };
    let url = DatabaseUrl::parse_url(&raw_url)?;
    if !url.is_sqlite() {
        anyhow::bail!("Demo data can only be loaded into SQLite databases");
    }

    let database = Database::connect(&DatabaseConfig::new(url)).await?;
    database.create_dev_schema().await?;

    let seeder = DistrictSeeder::new(&database);
    if args.reset {
        seeder.reset().await?;
    }
    let summary = seeder.load_demo(args.days).await?;

    info!(
        "Seeded {} flow rows, {} age sales rows, {} shop rows",
        summary.flow_rows, summary.age_sales_rows, summary.shop_rows
    );

    database.close().await;
    Ok(())
}
