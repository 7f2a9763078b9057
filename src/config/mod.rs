// ABOUTME: Configuration module for centralized server settings
// ABOUTME: Re-exports server, database and text-generation configuration loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

//! Configuration for the Pyxis Store Info server.
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file). See [`environment::ServerConfig::from_env`].

/// Database URL and pool configuration
pub mod database;
/// Server-wide configuration and timeouts
pub mod environment;
/// Text-generation provider configuration
pub mod llm;

pub use database::{DatabaseConfig, DatabaseUrl, PoolConfig};
pub use environment::{CorsConfig, Environment, RouteTimeoutConfig, ServerConfig};
pub use llm::LlmConfig;
