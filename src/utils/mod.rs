// ABOUTME: Small shared helpers used across routes and services
// ABOUTME: Currently holds the per-call timeout wrappers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

/// Timeout wrappers for store and text-generation calls
pub mod route_timeout;
