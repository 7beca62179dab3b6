//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Offset/limit pagination parameters (`?skip=&limit=`).
///
/// Values are clamped with `blog_core::pagination` before reaching the
/// repository.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
