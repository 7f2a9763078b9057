// ABOUTME: HTTP tests for the strategy insight endpoint
// ABOUTME: Covers fact derivation, unknown sentinels and dependency failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{app, CountingRepository, ScriptedLlm, TestDatabase};
use pyxis_store_info::constants::UNKNOWN_LABEL;
use pyxis_store_info::database::seed::AgeSalesSeed;
use pyxis_store_info::errors::ErrorCode;
use pyxis_store_info::llm::prompts::INSIGHT_TEMPERATURE;
use pyxis_store_info::llm::LlmProvider;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

fn insight_uri(dong: &str) -> String {
    format!("/api/v1/insight/strategy?dong={}", urlencoding::encode(dong))
}

async fn seeded_district() -> TestDatabase {
    let db = TestDatabase::new().await;
    let seeder = db.seeder();

    seeder.insert_flow("역삼1동", "2024-05-01 18:00:00", 300).await.unwrap();
    seeder.insert_flow("역삼1동", "2024-05-02 18:30:00", 250).await.unwrap();
    seeder.insert_flow("역삼1동", "2024-05-01 12:00:00", 400).await.unwrap();
    seeder.insert_flow("역삼1동", "2024-05-01 07:00:00", 50).await.unwrap();

    seeder
        .insert_age_sales(
            "역삼1동",
            &AgeSalesSeed {
                year_quarter: "20241".to_owned(),
                amounts: [0.0, 900.0, 100.0, 0.0, 0.0, 0.0],
                counts: [0; 6],
            },
        )
        .await
        .unwrap();
    seeder
        .insert_age_sales(
            "역삼1동",
            &AgeSalesSeed {
                year_quarter: "20242".to_owned(),
                amounts: [0.0, 100.0, 900.0, 0.0, 0.0, 0.0],
                counts: [0; 6],
            },
        )
        .await
        .unwrap();

    for _ in 0..3 {
        seeder.insert_shop("역삼1동", "한식").await.unwrap();
    }
    seeder.insert_shop("역삼1동", "커피전문점").await.unwrap();
    db
}

#[tokio::test]
async fn test_insight_derives_three_facts() {
    let db = seeded_district().await;
    let llm = ScriptedLlm::replying("퇴근 시간대 30대를 겨냥한 저녁 세트 메뉴를 추천합니다.");
    let response = AxumTestRequest::get(&insight_uri("역삼1동"))
        .send(app(db.repository(), Some(llm.clone() as Arc<dyn LlmProvider>)))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["dong"], "역삼1동");
    assert_eq!(body["peak_hour"], "18시");
    assert_eq!(body["main_age"], "30대");
    assert_eq!(body["top_category"], "한식");
    assert_eq!(
        body["insight"],
        "퇴근 시간대 30대를 겨냥한 저녁 세트 메뉴를 추천합니다."
    );

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    for fact in ["역삼1동", "18시", "30대", "한식"] {
        assert!(prompts[0].contains(fact), "prompt is missing {fact}");
    }
}

#[tokio::test]
async fn test_ties_resolve_to_earliest_hour_and_smallest_category() {
    let db = TestDatabase::new().await;
    let seeder = db.seeder();
    seeder.insert_flow("망원동", "2024-05-01 19:00:00", 120).await.unwrap();
    seeder.insert_flow("망원동", "2024-05-01 09:00:00", 70).await.unwrap();
    seeder.insert_flow("망원동", "2024-05-02 09:30:00", 50).await.unwrap();
    seeder.insert_flow("망원동", "2024-05-01 13:00:00", 40).await.unwrap();
    for category in ["Z", "Z", "B", "B", "M"] {
        seeder.insert_shop("망원동", category).await.unwrap();
    }

    let llm = ScriptedLlm::replying("ok");
    let response = AxumTestRequest::get(&insight_uri("망원동"))
        .send(app(db.repository(), Some(llm as Arc<dyn LlmProvider>)))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["peak_hour"], "09시");
    assert_eq!(body["top_category"], "B");
}

#[tokio::test]
async fn test_generation_request_carries_model_and_temperature() {
    let db = seeded_district().await;
    let llm = ScriptedLlm::replying("ok");
    AxumTestRequest::get(&insight_uri("역삼1동"))
        .send(app(db.repository(), Some(llm.clone() as Arc<dyn LlmProvider>)))
        .await;

    let requests = llm.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model.as_deref(), Some("gpt-4o-mini"));
    assert_eq!(requests[0].temperature, Some(INSIGHT_TEMPERATURE));
}

#[tokio::test]
async fn test_missing_table_fails_the_insight() {
    let db = seeded_district().await;
    sqlx::query("DROP TABLE shop_info")
        .execute(db.database.pool())
        .await
        .unwrap();

    let llm = ScriptedLlm::replying("unused");
    let response = AxumTestRequest::get(&insight_uri("역삼1동"))
        .send(app(db.repository(), Some(llm.clone() as Arc<dyn LlmProvider>)))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    assert!(body.get("insight").is_none());
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn test_insight_uses_substring_match_and_echoes_compacted_key() {
    let db = seeded_district().await;
    let llm = ScriptedLlm::replying("ok");
    let response = AxumTestRequest::get(&insight_uri(" 역삼 1동 "))
        .send(app(db.repository(), Some(llm as Arc<dyn LlmProvider>)))
        .await;

    let body: Value = response.json();
    assert_eq!(body["dong"], "역삼1동");
    assert_eq!(body["peak_hour"], "18시");
}

#[tokio::test]
async fn test_insight_falls_back_to_unknown_for_empty_data() {
    let db = TestDatabase::new().await;
    let llm = ScriptedLlm::replying("데이터가 부족합니다.");
    let response = AxumTestRequest::get(&insight_uri("없는동"))
        .send(app(db.repository(), Some(llm.clone() as Arc<dyn LlmProvider>)))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["peak_hour"], UNKNOWN_LABEL);
    assert_eq!(body["main_age"], UNKNOWN_LABEL);
    assert_eq!(body["top_category"], UNKNOWN_LABEL);
    assert_eq!(body["insight"], "데이터가 부족합니다.");
    assert!(llm.prompts()[0].contains(UNKNOWN_LABEL));
}

#[tokio::test]
async fn test_all_zero_sales_pick_the_first_bracket() {
    let db = TestDatabase::new().await;
    db.seeder()
        .insert_age_sales(
            "명동",
            &AgeSalesSeed {
                year_quarter: "20242".to_owned(),
                amounts: [0.0; 6],
                counts: [0; 6],
            },
        )
        .await
        .unwrap();

    let llm = ScriptedLlm::replying("ok");
    let response = AxumTestRequest::get(&insight_uri("명동"))
        .send(app(db.repository(), Some(llm as Arc<dyn LlmProvider>)))
        .await;
    let body: Value = response.json();
    assert_eq!(body["main_age"], "10대");
}

#[tokio::test]
async fn test_generation_failure_returns_error_without_insight() {
    let db = seeded_district().await;
    for (code, status) in [
        (ErrorCode::ExternalServiceError, 502),
        (ErrorCode::ExternalAuthFailed, 502),
        (ErrorCode::ExternalRateLimited, 503),
        (ErrorCode::ExternalServiceUnavailable, 503),
    ] {
        let llm = ScriptedLlm::failing(code);
        let response = AxumTestRequest::get(&insight_uri("역삼1동"))
            .send(app(db.repository(), Some(llm as Arc<dyn LlmProvider>)))
            .await;

        assert_eq!(response.status(), status, "{code:?}");
        let body: Value = response.json();
        assert!(body.get("insight").is_none());
        assert!(body["error"]["code"].is_string());
    }
}

#[tokio::test]
async fn test_generation_timeout_is_reported() {
    let db = seeded_district().await;
    let llm = ScriptedLlm::stalling(Duration::from_secs(5));
    let response = AxumTestRequest::get(&insight_uri("역삼1동"))
        .send(app(db.repository(), Some(llm as Arc<dyn LlmProvider>)))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "EXTERNAL_TIMEOUT");
}

#[tokio::test]
async fn test_missing_provider_answers_service_unavailable() {
    let db = seeded_district().await;
    let response = AxumTestRequest::get(&insight_uri("역삼1동"))
        .send(app(db.repository(), None))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "CONFIG_MISSING");
}

#[tokio::test]
async fn test_store_failure_aborts_before_generation() {
    let repo = CountingRepository::failing(ErrorCode::DatabaseTimeout);
    let llm = ScriptedLlm::replying("unused");
    let response = AxumTestRequest::get(&insight_uri("역삼1동"))
        .send(app(repo, Some(llm.clone() as Arc<dyn LlmProvider>)))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "DATABASE_TIMEOUT");
    assert!(llm.prompts().is_empty());
}
