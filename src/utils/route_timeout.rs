// ABOUTME: Timeout utilities that bound store and text-generation calls
// ABOUTME: Converts elapsed budgets into dependency-failure errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pyxis Store Info

use pyxis_core::errors::{AppError, AppResult, ErrorCode};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::warn;

/// Execute a database operation within `limit`
///
/// # Errors
///
/// Returns `DatabaseTimeout` if the budget elapses, or the operation's own error
///
/// # Example
/// ```rust,no_run
/// use pyxis_store_info::utils::route_timeout::with_database_timeout;
/// use std::time::Duration;
///
/// # async fn example() -> pyxis_core::errors::AppResult<()> {
/// let rows: Vec<i64> = with_database_timeout(Duration::from_secs(5), async {
///     Ok::<_, pyxis_core::errors::AppError>(vec![1, 2, 3])
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn with_database_timeout<F, T, E>(limit: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    (timeout(limit, operation).await).map_or_else(
        |_| {
            warn!(timeout_secs = limit.as_secs(), "Database operation timed out");
            Err(AppError::database_timeout(format!(
                "Database operation timed out after {}s",
                limit.as_secs()
            )))
        },
        |result| result.map_err(Into::into),
    )
}

/// Execute a text-generation call within `limit`
///
/// # Errors
///
/// Returns `ExternalTimeout` if the budget elapses, or the operation's own error
pub async fn with_llm_timeout<F, T, E>(limit: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    (timeout(limit, operation).await).map_or_else(
        |_| {
            warn!(timeout_secs = limit.as_secs(), "Text generation timed out");
            Err(AppError::new(
                ErrorCode::ExternalTimeout,
                format!("Text generation timed out after {}s", limit.as_secs()),
            ))
        },
        |result| result.map_err(Into::into),
    )
}
