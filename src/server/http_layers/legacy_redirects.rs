//! Permanent redirects for retired URLs.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

pub type LegacyRedirects = Arc<BTreeMap<String, String>>;

/// Answers mapped paths with `308 Permanent Redirect` before routing.
/// The query string is carried over to the new location.
pub async fn legacy_redirects(
    State(redirects): State<LegacyRedirects>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if let Some(target) = redirects.get(path) {
        let location = match request.uri().query() {
            Some(query) => format!("{}?{}", target, query),
            None => target.clone(),
        };
        debug!("Redirecting {} to {}", path, location);
        return Redirect::permanent(&location).into_response();
    }
    next.run(request).await
}
