// ABOUTME: HTTP tests for the flow, sales and shop aggregation endpoints
// ABOUTME: Covers validation envelopes, match policies, ordering and bracket columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{app, CountingRepository, TestDatabase};
use pyxis_store_info::database::seed::AgeSalesSeed;
use serde_json::Value;
use std::sync::Arc;

const DATA_ENDPOINTS: [&str; 5] = [
    "/api/v1/flow/hourly",
    "/api/v1/sales/age",
    "/api/v1/sales/age-count",
    "/api/v1/shop/count",
    "/api/v1/insight/strategy",
];

fn uri(endpoint: &str, dong: &str) -> String {
    format!("{endpoint}?dong={}", urlencoding::encode(dong))
}

async fn seeded_flow() -> TestDatabase {
    let db = TestDatabase::new().await;
    let seeder = db.seeder();
    seeder.insert_flow("역삼1동", "2024-05-01 09:15:00", 30).await.unwrap();
    seeder.insert_flow("역삼1동", "2024-05-01 09:45:00", 20).await.unwrap();
    seeder.insert_flow("역삼1동", "2024-05-01 08:10:00", 10).await.unwrap();
    seeder.insert_flow("역삼2동", "2024-05-01 08:30:00", 5).await.unwrap();
    seeder.insert_flow("서교동", "2024-05-01 08:00:00", 999).await.unwrap();
    db
}

#[tokio::test]
async fn test_missing_dong_is_rejected_on_every_endpoint() {
    let repo = CountingRepository::empty();
    for endpoint in DATA_ENDPOINTS {
        let response = AxumTestRequest::get(endpoint)
            .send(app(repo.clone(), None))
            .await;

        assert_eq!(response.status(), 400, "{endpoint}");
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD", "{endpoint}");
        assert!(body["error"]["message"].as_str().unwrap().contains("dong"));
        assert!(body["error"]["request_id"].is_string());
    }
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_blank_dong_never_reaches_the_store() {
    let repo = CountingRepository::empty();
    for endpoint in DATA_ENDPOINTS {
        for blank in ["", "%20%20", "%09"] {
            let response = AxumTestRequest::get(&format!("{endpoint}?dong={blank}"))
                .send(app(repo.clone(), None))
                .await;
            assert_eq!(response.status(), 400, "{endpoint}?dong={blank}");
            let body: Value = response.json();
            assert_eq!(body["error"]["code"], "INVALID_INPUT");
        }
    }
    assert_eq!(repo.calls(), 0);
}

#[tokio::test]
async fn test_hourly_flow_is_bucketed_and_ascending() {
    let db = seeded_flow().await;
    let response = AxumTestRequest::get(&uri("/api/v1/flow/hourly", "역삼1동"))
        .send(app(db.repository(), None))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["dong"], "역삼1동");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["hour"], "2024-05-01 08:00");
    assert_eq!(data[0]["visitor_sum"], 10);
    assert_eq!(data[1]["hour"], "2024-05-01 09:00");
    assert_eq!(data[1]["visitor_sum"], 50);
}

#[tokio::test]
async fn test_hourly_flow_ignores_whitespace_in_the_key() {
    let db = seeded_flow().await;
    let response = AxumTestRequest::get(&uri("/api/v1/flow/hourly", " 역삼 1동 "))
        .send(app(db.repository(), None))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["dong"], "역삼1동");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_hourly_flow_matches_by_substring() {
    let db = seeded_flow().await;
    let response = AxumTestRequest::get(&uri("/api/v1/flow/hourly", "역삼"))
        .send(app(db.repository(), None))
        .await;

    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();
    // 08:00 gathers both 역삼1동 and 역삼2동; 서교동 never matches
    assert_eq!(data[0]["visitor_sum"], 15);
    assert_eq!(data[1]["visitor_sum"], 50);
}

#[tokio::test]
async fn test_unknown_dong_returns_empty_data() {
    let db = seeded_flow().await;
    for endpoint in &DATA_ENDPOINTS[..4] {
        let response = AxumTestRequest::get(&uri(endpoint, "없는동"))
            .send(app(db.repository(), None))
            .await;
        assert_eq!(response.status(), 200, "{endpoint}");
        let body: Value = response.json();
        assert_eq!(body["dong"], "없는동");
        assert!(body["data"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_age_sales_returns_six_brackets_per_quarter_ascending() {
    let db = TestDatabase::new().await;
    let seeder = db.seeder();
    for (quarter, base) in [("20242", 2.0), ("20241", 1.0)] {
        seeder
            .insert_age_sales(
                "역삼1동",
                &AgeSalesSeed {
                    year_quarter: quarter.to_owned(),
                    amounts: [base, base * 10.0, base * 20.0, 0.0, 5.0, 6.0],
                    counts: [1, 2, 3, 4, 5, 6],
                },
            )
            .await
            .unwrap();
    }

    let response = AxumTestRequest::get(&uri("/api/v1/sales/age", "역삼1동"))
        .send(app(db.repository(), None))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["year_quarter"], "20241");
    assert_eq!(data[1]["year_quarter"], "20242");

    let row = data[0].as_object().unwrap();
    for column in [
        "age_10_amount",
        "age_20_amount",
        "age_30_amount",
        "age_40_amount",
        "age_50_amount",
        "age_60_amount",
    ] {
        assert!(row[column].is_number(), "{column}");
    }
    assert_eq!(row["age_30_amount"].as_f64().unwrap(), 20.0);

    let response = AxumTestRequest::get(&uri("/api/v1/sales/age-count", "역삼1동"))
        .send(app(db.repository(), None))
        .await;
    let body: Value = response.json();
    let row = &body["data"][1];
    assert_eq!(row["year_quarter"], "20242");
    assert_eq!(row["age_10_count"], 1);
    assert_eq!(row["age_60_count"], 6);
}

#[tokio::test]
async fn test_age_sales_requires_an_exact_match() {
    let db = TestDatabase::new().await;
    db.seeder()
        .insert_age_sales(
            "역삼1동",
            &AgeSalesSeed {
                year_quarter: "20241".to_owned(),
                amounts: [1.0; 6],
                counts: [1; 6],
            },
        )
        .await
        .unwrap();

    let response = AxumTestRequest::get(&uri("/api/v1/sales/age", "역삼"))
        .send(app(db.repository(), None))
        .await;
    let body: Value = response.json();
    assert!(body["data"].as_array().unwrap().is_empty());

    let response = AxumTestRequest::get(&uri("/api/v1/sales/age", " 역삼1동 "))
        .send(app(db.repository(), None))
        .await;
    let body: Value = response.json();
    assert_eq!(body["dong"], "역삼1동");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_shop_count_orders_by_count_then_category() {
    let db = TestDatabase::new().await;
    let seeder = db.seeder();
    for (category, count) in [("C", 2), ("B", 5), ("A", 5)] {
        for _ in 0..count {
            seeder.insert_shop("명동", category).await.unwrap();
        }
    }
    seeder.insert_shop("명동2가", "Z").await.unwrap();

    let response = AxumTestRequest::get(&uri("/api/v1/shop/count", "명동"))
        .send(app(db.repository(), None))
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();
    let categories: Vec<&str> = data.iter().map(|r| r["category"].as_str().unwrap()).collect();
    assert_eq!(categories, ["A", "B", "C"]);
    assert_eq!(data[0]["cnt"], 5);
    assert_eq!(data[2]["cnt"], 2);
}

#[tokio::test]
async fn test_store_failure_maps_to_service_unavailable() {
    let repo = CountingRepository::failing(pyxis_store_info::errors::ErrorCode::DatabaseUnavailable);
    let response = AxumTestRequest::get(&uri("/api/v1/shop/count", "명동"))
        .header("x-request-id", "trace-me")
        .send(app(repo, None))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_UNAVAILABLE");
    assert_eq!(body["error"]["request_id"], "trace-me");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_closed_pool_returns_service_unavailable_not_empty_data() {
    let db = seeded_flow().await;
    let repository = db.repository();
    db.database.close().await;

    for endpoint in &DATA_ENDPOINTS[..4] {
        let response = AxumTestRequest::get(&uri(endpoint, "역삼1동"))
            .send(app(Arc::clone(&repository), None))
            .await;
        assert_eq!(response.status(), 503, "{endpoint}");
        let body: Value = response.json();
        assert_eq!(body["error"]["code"], "DATABASE_UNAVAILABLE", "{endpoint}");
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_failed_query_hides_driver_detail() {
    let db = TestDatabase::new().await;
    db.seeder().insert_shop("명동", "한식").await.unwrap();
    sqlx::query("DROP TABLE shop_info")
        .execute(db.database.pool())
        .await
        .unwrap();

    let response = AxumTestRequest::get(&uri("/api/v1/shop/count", "명동"))
        .send(app(db.repository(), None))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    assert_eq!(body["error"]["message"], "Database query failed");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_concurrent_requests_do_not_mix_locations() {
    let db = seeded_flow().await;
    let repository = db.repository();

    let mut handles = Vec::new();
    for i in 0..50 {
        let repository = Arc::clone(&repository);
        let dong = if i % 2 == 0 { "서교동" } else { "역삼1동" };
        handles.push(tokio::spawn(async move {
            let response = AxumTestRequest::get(&uri("/api/v1/flow/hourly", dong))
                .send(app(repository, None))
                .await;
            (dong, response.json::<Value>())
        }));
    }

    for handle in handles {
        let (dong, body) = handle.await.unwrap();
        assert_eq!(body["dong"], dong);
        let total: i64 = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["visitor_sum"].as_i64().unwrap())
            .sum();
        let expected = if dong == "서교동" { 999 } else { 60 };
        assert_eq!(total, expected);
    }
}
