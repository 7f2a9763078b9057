// ABOUTME: OpenAI-compatible chat completions client used to write district strategy text
// ABOUTME: Maps HTTP and transport failures onto the external-service error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # `OpenAI`-Compatible Provider
//!
//! Calls `POST {base_url}/chat/completions` with a bearer token. Works with
//! the hosted `OpenAI` API and any server speaking the same protocol.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pyxis_store_info::config::LlmConfig;
//! use pyxis_store_info::llm::{CompletionRequest, LlmProvider, OpenAiCompatibleProvider};
//! use pyxis_core::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = LlmConfig::from_env().map_err(|e| AppError::config(e.to_string()))?;
//!     let provider = OpenAiCompatibleProvider::from_llm_config(&config)?;
//!     let request = CompletionRequest::new("상권 전략을 두 줄로 알려줘");
//!     let completion = provider.complete(&request).await?;
//!     println!("{}", completion.text);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::{Completion, CompletionRequest, LlmProvider, TokenUsage};
use crate::config::LlmConfig;
use pyxis_core::errors::{AppError, ErrorCode};

/// Service name used in error messages
const SERVICE: &str = "OpenAI";

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: [OpenAiMessage<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// The prompt always travels as the single user-role message
#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

// ============================================================================
// Provider Configuration
// ============================================================================

/// Configuration for the `OpenAI`-compatible provider
#[derive(Clone)]
pub struct OpenAiCompatibleConfig {
    /// Base URL for the API (e.g., <https://api.openai.com/v1>)
    pub base_url: String,
    /// Bearer token
    pub api_key: String,
    /// Model to use when the request does not name one
    pub default_model: String,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for OpenAiCompatibleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"****")
            .field("default_model", &self.default_model)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Chat completions client for any `OpenAI`-compatible endpoint
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: OpenAiCompatibleConfig,
}

impl OpenAiCompatibleProvider {
    /// Create a new provider with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: OpenAiCompatibleConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create a provider from loaded settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when no API key is configured, or an error if
    /// the HTTP client cannot be created.
    pub fn from_llm_config(config: &LlmConfig) -> Result<Self, AppError> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            AppError::new(ErrorCode::ConfigMissing, "OPENAI_API_KEY is not configured")
        })?;

        info!(
            "Initializing OpenAI-compatible provider: base_url={}, model={}",
            config.base_url, config.model
        );

        Self::new(OpenAiCompatibleConfig {
            base_url: config.base_url.clone(),
            api_key,
            default_model: config.model.clone(),
            request_timeout: Duration::from_secs(config.timeout_secs),
            connect_timeout: Duration::from_secs(config.connect_timeout_secs),
        })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint
        )
    }

    fn add_auth_header(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.config.api_key)
    }

    /// Map a transport failure (no HTTP status received)
    fn transport_error(e: &reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::new(
                ErrorCode::ExternalTimeout,
                format!("{SERVICE}: request timed out"),
            )
        } else if e.is_connect() {
            AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("{SERVICE}: cannot connect: {e}"),
            )
        } else {
            AppError::external_service(SERVICE, format!("Request failed: {e}"))
        }
    }

    /// Map a non-success HTTP status onto an error code
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<OpenAiErrorResponse>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |parsed| parsed.error.message,
        );

        let code = match status.as_u16() {
            401 | 403 => ErrorCode::ExternalAuthFailed,
            429 => ErrorCode::ExternalRateLimited,
            500..=599 => ErrorCode::ExternalServiceUnavailable,
            _ => ErrorCode::ExternalServiceError,
        };

        AppError::new(code, format!("{SERVICE} API error ({status}): {detail}"))
    }

    fn bad_response(message: impl Into<String>) -> AppError {
        AppError::new(
            ErrorCode::ExternalBadResponse,
            format!("{SERVICE}: {}", message.into()),
        )
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(&self.config.default_model)))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError> {
        let model = request
            .model
            .as_deref()
            .unwrap_or(&self.config.default_model);

        let openai_request = OpenAiRequest {
            model,
            messages: [OpenAiMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
        };

        debug!(
            prompt_chars = request.prompt.chars().count(),
            temperature = ?request.temperature,
            "Sending chat completion request"
        );

        let http_request = self
            .client
            .post(self.api_url("chat/completions"))
            .json(&openai_request);

        let response = self
            .add_auth_header(http_request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", SERVICE, e);
                Self::transport_error(&e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            Self::transport_error(&e)
        })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Chat completion rejected");
            return Err(Self::parse_error_response(status, &body));
        }

        let openai_response: OpenAiResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse API response: {}", e);
            Self::bad_response(format!("Failed to parse response: {e}"))
        })?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Self::bad_response("API returned no choices"))?;

        let content = choice
            .message
            .content
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| Self::bad_response("API returned an empty completion"))?;

        debug!(
            "Received response: {} chars, finish_reason: {:?}",
            content.chars().count(),
            choice.finish_reason
        );

        Ok(Completion {
            text: content,
            model: openai_response.model.unwrap_or_else(|| model.to_owned()),
            usage: openai_response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
