// ABOUTME: Tests the demo dataset and the SQL repository against a SQLite store
// ABOUTME: Confirms each demo district yields the facts the seeder was built around
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::fixtures::TestDatabase;
use pyxis_store_info::location::LocationKey;
use pyxis_store_info::models::AgeBracket;

#[tokio::test]
async fn test_demo_dataset_counts() {
    let db = TestDatabase::new().await;
    let summary = db.seeder().load_demo(2).await.unwrap();

    assert_eq!(summary.flow_rows, 3 * 2 * 24);
    assert_eq!(summary.age_sales_rows, 3 * 4);
    assert_eq!(summary.shop_rows, 25 + 27 + 31);
}

#[tokio::test]
async fn test_demo_districts_yield_expected_facts() {
    let db = TestDatabase::new().await;
    db.seeder().load_demo(7).await.unwrap();
    let repo = db.repository();

    for (dong, hour, bracket, category) in [
        ("역삼1동", 18, AgeBracket::Age30, "한식"),
        ("서교동", 21, AgeBracket::Age20, "주점"),
        ("명동", 14, AgeBracket::Age40, "화장품"),
    ] {
        let key = LocationKey::parse(Some(dong)).unwrap();

        let peak = repo.peak_hour(&key).await.unwrap().unwrap();
        assert_eq!(peak.hour_of_day, hour, "{dong}");

        let latest = repo.latest_age_sales(&key).await.unwrap().unwrap();
        assert_eq!(latest.year_quarter, "20242");
        assert_eq!(latest.dominant_bracket(), bracket, "{dong}");

        let top = repo.top_category(&key).await.unwrap().unwrap();
        assert_eq!(top.category, category);

        let flow = repo.hourly_flow(&key).await.unwrap();
        assert_eq!(flow.len(), 7 * 24);
        assert!(flow.windows(2).all(|w| w[0].hour < w[1].hour));
    }
}

#[tokio::test]
async fn test_reset_clears_every_table() {
    let db = TestDatabase::new().await;
    let seeder = db.seeder();
    seeder.load_demo(1).await.unwrap();
    seeder.reset().await.unwrap();

    let repo = db.repository();
    let key = LocationKey::parse(Some("명동")).unwrap();
    assert!(repo.hourly_flow(&key).await.unwrap().is_empty());
    assert!(repo.age_sales_amounts(&key).await.unwrap().is_empty());
    assert!(repo.shop_category_counts(&key).await.unwrap().is_empty());
    assert!(repo.peak_hour(&key).await.unwrap().is_none());
}

#[tokio::test]
async fn test_shop_rows_without_category_are_skipped() {
    let db = TestDatabase::new().await;
    sqlx::query("INSERT INTO shop_info (dong_name, mid_category_name) VALUES ('명동', NULL)")
        .execute(db.database.pool())
        .await
        .unwrap();
    db.seeder().insert_shop("명동", "한식").await.unwrap();

    let repo = db.repository();
    let key = LocationKey::parse(Some("명동")).unwrap();
    let rows = repo.shop_category_counts(&key).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "한식");
}
