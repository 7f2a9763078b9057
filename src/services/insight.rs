// ABOUTME: Composes the strategy insight from three look-ups and one text-generation call
// ABOUTME: Empty look-ups become the unknown sentinel; any dependency failure aborts the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use crate::constants::UNKNOWN_LABEL;
use crate::database::DistrictRepository;
use crate::llm::prompts::INSIGHT_TEMPERATURE;
use crate::llm::{CompletionRequest, InsightFacts, InsightPromptTemplate, LlmProvider};
use crate::location::LocationKey;
use crate::utils::route_timeout::with_llm_timeout;
use pyxis_core::errors::{AppError, AppResult, ErrorCode};
use pyxis_core::models::InsightResult;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Builds [`InsightResult`]s
#[derive(Clone)]
pub struct InsightComposer {
    repository: Arc<dyn DistrictRepository>,
    llm: Option<Arc<dyn LlmProvider>>,
    template: InsightPromptTemplate,
    model: String,
    llm_timeout: Duration,
}

impl InsightComposer {
    /// Composer using `llm` for narratives; `None` makes every call fail with `ConfigMissing`
    #[must_use]
    pub fn new(
        repository: Arc<dyn DistrictRepository>,
        llm: Option<Arc<dyn LlmProvider>>,
        model: impl Into<String>,
        llm_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            llm,
            template: InsightPromptTemplate::default(),
            model: model.into(),
            llm_timeout,
        }
    }

    /// Derive the three facts for a location and ask for a strategy narrative
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a missing or blank location,
    /// `ConfigMissing` when no text-generation provider is configured, and a
    /// dependency failure if any look-up or the generation call fails
    #[instrument(skip(self))]
    pub async fn compose(&self, raw: Option<&str>) -> AppResult<InsightResult> {
        let location = LocationKey::parse(raw)?;
        let llm = self.llm.as_ref().ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "Text generation is not configured",
            )
        })?;

        let (peak, latest_sales, top_category) = tokio::try_join!(
            self.repository.peak_hour(&location),
            self.repository.latest_age_sales(&location),
            self.repository.top_category(&location),
        )?;

        let peak_hour = peak.map_or_else(|| UNKNOWN_LABEL.to_owned(), |p| p.label());
        let main_age = latest_sales.map_or_else(
            || UNKNOWN_LABEL.to_owned(),
            |sales| sales.dominant_bracket().label().to_owned(),
        );
        let top_category =
            top_category.map_or_else(|| UNKNOWN_LABEL.to_owned(), |record| record.category);

        debug!(
            peak_hour = %peak_hour,
            main_age = %main_age,
            top_category = %top_category,
            "Insight facts derived"
        );

        let prompt = self.template.render(&InsightFacts {
            dong: location.fuzzy(),
            peak_hour: &peak_hour,
            main_age: &main_age,
            top_category: &top_category,
        });
        let request = CompletionRequest::new(prompt)
            .with_model(&self.model)
            .with_temperature(INSIGHT_TEMPERATURE);

        let completion = with_llm_timeout(self.llm_timeout, llm.complete(&request)).await?;
        info!(
            provider = llm.name(),
            model = %completion.model,
            chars = completion.text.chars().count(),
            total_tokens = completion.usage.map(|u| u.total_tokens),
            finish_reason = completion.finish_reason.as_deref().unwrap_or("-"),
            "Insight generated"
        );

        Ok(InsightResult {
            dong: location.fuzzy().to_owned(),
            peak_hour,
            main_age,
            top_category,
            insight: completion.text,
        })
    }
}
