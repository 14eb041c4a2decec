//! REST API handler for café lookups
//!
//! This module implements the `GET /cafe` endpoint.

use super::{helpers::*, models::CafeQueryError, state::SharedState};
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};

/// Creates routes for café lookups
pub fn routes() -> Router<SharedState> {
    Router::new().route("/cafe", get(list_cafes))
}

/// Endpoint: GET /cafe?city=<city>&count=<n>
/// Returns up to `count` café names of `city`, comma separated.
async fn list_cafes(
    State(state): State<SharedState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, CafeQueryError> {
    let raw = parse_query(&pairs);

    match find_cafes(raw, &state.repository) {
        Ok(body) => {
            tracing::debug!(cafes = %body, "Café query served");
            Ok(body)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "Café query rejected");
            Err(err)
        }
    }
}
