// ABOUTME: Main library entry point for the Pyxis Store Info API
// ABOUTME: Read-only commercial district statistics over HTTP with generated strategy insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

#![deny(unsafe_code)]

//! # Pyxis Store Info
//!
//! A read-only HTTP API exposing aggregated commercial-district statistics
//! (foot traffic, age-segmented sales, shop categories) from a relational
//! store, plus one endpoint that turns derived facts into a short strategy
//! narrative through an OpenAI-compatible text-generation service.
//!
//! ## Endpoints
//!
//! All data routes live under `API_PREFIX` (default `/api/v1`) and take a
//! `dong` query parameter:
//!
//! - `GET /flow/hourly`: visitors per hour bucket
//! - `GET /sales/age`: per-quarter sales amounts by age bracket
//! - `GET /sales/age-count`: per-quarter transaction counts by age bracket
//! - `GET /shop/count`: shops per business category
//! - `GET /insight/strategy`: peak hour, main age bracket, top category and narrative
//!
//! ## Architecture
//!
//! - **Routes**: thin axum handlers
//! - **Services**: input validation and result assembly
//! - **Database**: sqlx pool and the SQL repository
//! - **LLM**: text-generation provider and prompt template
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pyxis_store_info::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pyxis Store Info configured on port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Environment variable names and defaults
pub mod constants;

/// Connection pool, SQL dialects and the district repository
pub mod database;

/// Text-generation provider and prompt template
pub mod llm;

/// Location key normalization
pub mod location;

/// Structured logging setup
pub mod logging;

/// Request ID, tracing and CORS middleware
pub mod middleware;

/// HTTP route handlers
pub mod routes;

/// Server resources, router assembly and serve loop
pub mod server;

/// Aggregation and insight services
pub mod services;

/// Timeout helpers
pub mod utils;

pub use pyxis_core::errors;
pub use pyxis_core::models;
