// ABOUTME: Text-generation service configuration
// ABOUTME: API key, endpoint, model and HTTP timeouts for the OpenAI-compatible provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::environment::{env_var_or, parse_env};
use crate::constants::{defaults, env_vars};
use anyhow::Result;
use std::env;
use std::fmt;

/// Settings for the OpenAI-compatible chat completions endpoint
#[derive(Clone)]
pub struct LlmConfig {
    /// Bearer token; `None` disables insight generation
    pub api_key: Option<String>,
    /// Base URL, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::OPENAI_BASE_URL.to_owned(),
            model: defaults::OPENAI_MODEL.to_owned(),
            timeout_secs: defaults::LLM_TIMEOUT_SECS,
            connect_timeout_secs: defaults::LLM_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Load from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is not a valid number
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env::var(env_vars::OPENAI_API_KEY)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            base_url: env_var_or(env_vars::OPENAI_BASE_URL, defaults::OPENAI_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
            model: env_var_or(env_vars::OPENAI_MODEL, defaults::OPENAI_MODEL),
            timeout_secs: parse_env(env_vars::LLM_TIMEOUT_SECS, defaults::LLM_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_env(
                env_vars::LLM_CONNECT_TIMEOUT_SECS,
                defaults::LLM_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }
}

impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "****"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
