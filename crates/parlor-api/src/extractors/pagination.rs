//! Pagination extractor
//!
//! Extracts limit/offset pagination parameters from query strings. The
//! message history window is anchored at the newest message: `offset` counts
//! backwards from the end, `limit` is the page width.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i64 = 50;
/// Maximum page size
const MAX_LIMIT: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i64>,
    /// How far back from the newest item the window starts
    #[serde(default)]
    pub offset: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Page width (clamped to 1-100)
    pub limit: i64,
    /// Window start, counted back from the newest item (never negative)
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(ApiError::invalid_query(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let offset = params.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ApiError::invalid_query("offset must not be negative"));
        }

        Ok(Pagination { limit, offset })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
