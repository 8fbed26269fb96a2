//! Search API routes

use super::api_error::internal_error;
use super::content_routes::requested_locale;
use super::metrics::{record_locale_fallback, record_search, search_outcome};
use super::state::ServerState;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::time::Instant;
use tracing::debug;

/// Every parameter is optional and kept as text so malformed values are
/// tolerated instead of rejected.
#[derive(Deserialize, Debug, Default)]
struct SearchParams {
    q: Option<String>,
    locale: Option<String>,
    limit: Option<String>,
}

/// Non-numeric or negative limits count as absent.
fn parse_limit(limit: Option<&str>) -> Option<usize> {
    limit.and_then(|l| l.trim().parse::<usize>().ok())
}

async fn search(State(state): State<ServerState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.unwrap_or_default();
    let locale = requested_locale(&state.registry, params.locale);
    let limit = state
        .config
        .search
        .effective_limit(parse_limit(params.limit.as_deref()));

    let start = Instant::now();
    match state.search_vault.search(&query, &locale, Some(limit)) {
        Ok(results) => {
            let outcome = search_outcome(&query, &results);
            record_search(outcome, start.elapsed());
            if results.fallback_locale_used {
                record_locale_fallback("search", &locale);
            }
            debug!(
                "Search {:?} in {} ({}): {} matches",
                query,
                locale,
                outcome,
                results.total()
            );
            Json(results).into_response()
        }
        Err(err) => internal_error("search", err),
    }
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(state)
}
