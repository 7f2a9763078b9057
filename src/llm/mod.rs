// ABOUTME: Text-generation abstraction used by the insight endpoint
// ABOUTME: One prompt in, one completion out, behind a provider trait the composer holds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # Text Generation
//!
//! The insight endpoint treats text generation as an opaque collaborator: it
//! renders one prompt, sends it as a single user-role message through an
//! [`LlmProvider`], and passes the returned text through untouched.
//!
//! ```rust,no_run
//! use pyxis_store_info::llm::{CompletionRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = CompletionRequest::new("역삼1동 상권 전략을 알려줘").with_temperature(0.7);
//!     let completion = provider.complete(&request).await;
//! }
//! ```

mod openai_compatible;
pub mod prompts;

pub use openai_compatible::{OpenAiCompatibleConfig, OpenAiCompatibleProvider};
pub use prompts::{InsightFacts, InsightPromptTemplate};

use async_trait::async_trait;
use pyxis_core::errors::AppError;

/// A single-prompt completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// User-role prompt text
    pub prompt: String,
    /// Model identifier; the provider default is used when `None`
    pub model: Option<String>,
    /// Sampling temperature (0.0 - 2.0); the service default when `None`
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    /// Request for `prompt` with provider defaults
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Generated text plus what the service reported about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Generated text
    pub text: String,
    /// Model that produced it
    pub model: String,
    /// Token accounting, when reported
    pub usage: Option<TokenUsage>,
    /// Why generation stopped (`stop`, `length`, ...)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens generated
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// Text-generation provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short provider identifier for logs
    fn name(&self) -> &'static str;

    /// Generate one completion for the request's prompt
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError>;
}
