// ABOUTME: Core types and constants for the Pyxis Store Info API
// ABOUTME: Foundation crate with error handling, district record models, and label constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

#![deny(unsafe_code)]

//! # Pyxis Core
//!
//! Foundation crate providing the shared types of the Pyxis Store Info API.
//! Nothing here performs I/O; the records are pure projections of rows read
//! from the commercial district store.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the JSON error envelope
//! - **models**: flow, age sales, shop category and insight records
//! - **constants**: sentinel and bracket labels

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// District statistics records and response envelopes
pub mod models;

/// Label constants shared across the API
pub mod constants;
