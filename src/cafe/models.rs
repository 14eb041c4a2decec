//! Café Query Models
//!
//! This module contains the per-request data structures of the café lookup
//! pipeline and the closed set of errors it can produce.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// =============================================================================
// Query Models
// =============================================================================

/// Query parameters exactly as received, before any validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    /// Requested city (empty when the parameter was absent)
    pub city: String,

    /// Requested count, `None` when the parameter was absent
    pub count: Option<String>,
}

/// A query that passed validation.
///
/// Only [`super::helpers::validate_query`] builds one, so holding a
/// `ParsedQuery` means the city is known to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// Supported city name
    pub city: String,

    /// Maximum number of cafés to return
    pub count: usize,
}

impl ParsedQuery {
    pub(super) fn new(city: String, count: usize) -> Self {
        Self { city, count }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Reasons a café query is rejected.
///
/// The `Display` text of each variant is the response body sent to the client.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CafeQueryError {
    /// City is not a key of the repository
    #[error("wrong city value")]
    UnsupportedCity,

    /// `count` parameter was not supplied
    #[error("count missing")]
    CountMissing,

    /// `count` is not a base-10 non-negative integer
    #[error("wrong count value")]
    InvalidCount,
}

impl CafeQueryError {
    /// HTTP status for this rejection
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedCity | Self::CountMissing | Self::InvalidCount => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for CafeQueryError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
