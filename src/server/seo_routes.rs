//! sitemap.xml and robots.txt

use super::api_error::internal_error;
use super::state::ServerState;
use crate::seo::{build_robots_txt, build_sitemap};
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

async fn get_sitemap(State(state): State<ServerState>) -> Response {
    let today = chrono::Utc::now().date_naive();
    match build_sitemap(&state.registry, &state.config.base_url, today) {
        Ok(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        Err(err) => internal_error("sitemap", err),
    }
}

async fn get_robots(State(state): State<ServerState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        build_robots_txt(&state.config.base_url),
    )
        .into_response()
}

pub fn make_seo_routes(state: ServerState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(get_sitemap))
        .route("/robots.txt", get(get_robots))
        .with_state(state)
}
