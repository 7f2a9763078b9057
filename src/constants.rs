// ABOUTME: Environment variable names and default values for the Pyxis Store Info server
// ABOUTME: Single place to look up every knob the configuration layer reads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! # Constants Module
//!
//! Environment variable names and their defaults. Labels that appear in API
//! responses live in `pyxis_core::constants`.

pub use pyxis_core::constants::{age_labels, HOUR_LABEL_SUFFIX, LOCATION_PARAM, UNKNOWN_LABEL};

/// Service identity used in logs and health responses
pub mod service_names {
    /// Default service name
    pub const PYXIS_STORE_INFO: &str = "pyxis-store-info";
}

/// Names of the environment variables read at startup
pub mod env_vars {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Route prefix
    pub const API_PREFIX: &str = "API_PREFIX";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// Full database URL, overrides the `DB_*` parts
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Database user
    pub const DB_USER: &str = "DB_USER";
    /// Database password
    pub const DB_PASSWORD: &str = "DB_PASSWORD";
    /// Database host
    pub const DB_HOST: &str = "DB_HOST";
    /// Database port
    pub const DB_PORT: &str = "DB_PORT";
    /// Database (schema) name
    pub const DB_NAME: &str = "DB_NAME";
    /// Idle connections kept open
    pub const DB_POOL_SIZE: &str = "DB_POOL_SIZE";
    /// Connections allowed beyond the pool size
    pub const DB_MAX_OVERFLOW: &str = "DB_MAX_OVERFLOW";
    /// Seconds to wait for a pooled connection
    pub const DB_POOL_TIMEOUT_SECS: &str = "DB_POOL_TIMEOUT_SECS";
    /// Seconds before a connection is recycled
    pub const DB_POOL_RECYCLE_SECS: &str = "DB_POOL_RECYCLE_SECS";
    /// Per-query time budget
    pub const DATABASE_TIMEOUT_SECS: &str = "DATABASE_TIMEOUT_SECS";

    /// Text-generation API key
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    /// Text-generation base URL
    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    /// Text-generation model
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    /// Text-generation request timeout
    pub const LLM_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
    /// Text-generation connect timeout
    pub const LLM_CONNECT_TIMEOUT_SECS: &str = "LLM_CONNECT_TIMEOUT_SECS";

    /// Whole-request timeout
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Defaults applied when a variable is unset
pub mod defaults {
    /// Listen port
    pub const HTTP_PORT: u16 = 8000;
    /// Bind address
    pub const HOST: &str = "0.0.0.0";
    /// Route prefix
    pub const API_PREFIX: &str = "/api/v1";
    /// MySQL port
    pub const DB_PORT: u16 = 3306;
    /// Idle connections kept open
    pub const DB_POOL_SIZE: u32 = 10;
    /// Connections allowed beyond the pool size
    pub const DB_MAX_OVERFLOW: u32 = 20;
    /// Pool acquire timeout
    pub const DB_POOL_TIMEOUT_SECS: u64 = 30;
    /// Connection max lifetime
    pub const DB_POOL_RECYCLE_SECS: u64 = 3600;
    /// Per-query timeout
    pub const DATABASE_TIMEOUT_SECS: u64 = 15;
    /// OpenAI-compatible endpoint
    pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
    /// Model identifier
    pub const OPENAI_MODEL: &str = "gpt-4o-mini";
    /// Text-generation request timeout
    pub const LLM_TIMEOUT_SECS: u64 = 60;
    /// Text-generation connect timeout
    pub const LLM_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Whole-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 90;
    /// CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}
