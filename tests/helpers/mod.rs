// ABOUTME: Shared helpers for the integration test suite
// ABOUTME: HTTP request helpers plus database, repository and text-generation fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

pub mod axum_test;
pub mod fixtures;
