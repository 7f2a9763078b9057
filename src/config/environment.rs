// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Bind address, route prefix, timeouts, CORS and the nested database/LLM settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use super::database::DatabaseConfig;
use super::llm::LlmConfig;
use crate::constants::{defaults, env_vars, service_names};
use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Time budgets for work done inside a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTimeoutConfig {
    /// Per-query budget in seconds
    pub database_timeout_secs: u64,
    /// Text-generation call budget in seconds
    pub llm_timeout_secs: u64,
    /// Whole-request budget enforced by the HTTP layer
    pub request_timeout_secs: u64,
}

impl Default for RouteTimeoutConfig {
    fn default() -> Self {
        Self {
            database_timeout_secs: defaults::DATABASE_TIMEOUT_SECS,
            llm_timeout_secs: defaults::LLM_TIMEOUT_SECS,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl RouteTimeoutConfig {
    /// Load timeouts from environment
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout variable is not a whole number of seconds
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_timeout_secs: parse_env(
                env_vars::DATABASE_TIMEOUT_SECS,
                defaults::DATABASE_TIMEOUT_SECS,
            )?,
            llm_timeout_secs: parse_env(env_vars::LLM_TIMEOUT_SECS, defaults::LLM_TIMEOUT_SECS)?,
            request_timeout_secs: parse_env(
                env_vars::REQUEST_TIMEOUT_SECS,
                defaults::REQUEST_TIMEOUT_SECS,
            )?,
        })
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: parse_origins(defaults::CORS_ALLOWED_ORIGINS),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Prefix every API route is mounted under (empty mounts at root)
    pub api_prefix: String,
    /// Deployment environment
    pub environment: Environment,
    /// Relational store settings
    pub database: DatabaseConfig,
    /// Text-generation settings
    pub llm: LlmConfig,
    /// Request-scoped time budgets
    pub route_timeouts: RouteTimeoutConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Service name reported in logs and health checks
    pub service_name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the result fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            host: env_var_or(env_vars::HOST, defaults::HOST),
            api_prefix: normalize_prefix(&env_var_or(env_vars::API_PREFIX, defaults::API_PREFIX)),
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            database: DatabaseConfig::from_env().context("Invalid database configuration")?,
            llm: LlmConfig::from_env().context("Invalid text-generation configuration")?,
            route_timeouts: RouteTimeoutConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                )),
            },
            service_name: env_var_or("SERVICE_NAME", service_names::PYXIS_STORE_INFO),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the settings contradict each other
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be greater than zero"));
        }

        if !self.api_prefix.is_empty() && !self.api_prefix.starts_with('/') {
            return Err(anyhow::anyhow!(
                "API_PREFIX must start with '/' (got {})",
                self.api_prefix
            ));
        }

        let timeouts = &self.route_timeouts;
        if timeouts.database_timeout_secs == 0
            || timeouts.llm_timeout_secs == 0
            || timeouts.request_timeout_secs == 0
        {
            return Err(anyhow::anyhow!("Timeouts must be at least one second"));
        }

        self.database.validate()?;

        if self.llm.api_key.is_none() {
            warn!("OPENAI_API_KEY is not set; /insight/strategy will answer 503");
        }

        Ok(())
    }

    /// Human-readable summary safe for logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pyxis Store Info Configuration:\n\
             - Bind: {}:{}\n\
             - API Prefix: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Pool: {} idle / {} max\n\
             - Text Generation: {} ({})\n\
             - Timeouts: db {}s, llm {}s, request {}s",
            self.host,
            self.http_port,
            if self.api_prefix.is_empty() {
                "/"
            } else {
                &self.api_prefix
            },
            self.environment,
            self.database.url.redacted(),
            self.database.pool.min_connections(),
            self.database.pool.max_connections(),
            self.llm.model,
            if self.llm.api_key.is_some() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.route_timeouts.database_timeout_secs,
            self.route_timeouts.llm_timeout_secs,
            self.route_timeouts.request_timeout_secs,
        )
    }
}

/// Read a variable with a string fallback
pub(crate) fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read and parse a variable, falling back to `default` when unset
pub(crate) fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {raw}")),
        Err(_) => Ok(default),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        return vec!["*".to_owned()];
    }
    origins_str
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip trailing slashes so `/api/v1/` and `/api/v1` mount identically
fn normalize_prefix(prefix: &str) -> String {
    prefix.trim().trim_end_matches('/').to_owned()
}
