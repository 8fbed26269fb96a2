use anyhow::{Context, Result};
use std::{sync::Arc, time::Duration};

use tracing::info;

use crate::content_store::ContentCounts;
use crate::registry::ContentRegistry;
use crate::search::{SearchVault, SearchVaultStats};
use tower_http::services::ServeDir;

use axum::{
    extract::State, middleware, response::IntoResponse, routing::get, Json, Router,
};
use serde::Serialize;

use super::content_routes::make_content_routes;
use super::metrics::metrics_handler;
use super::seo_routes::make_seo_routes;
use super::{
    http_cache, legacy_redirects, log_requests, make_search_routes, state::*, LegacyRedirects,
    ServerConfig,
};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
    pub hash: String,
    pub total_items: usize,
    pub content: ContentCounts,
    pub search: SearchVaultStats,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let content = state.registry.get_counts();
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: state.version.clone(),
        hash: state.hash.clone(),
        total_items: content.total(),
        content,
        search: state.search_vault.get_stats(),
    };
    Json(stats)
}

pub fn make_app(
    config: ServerConfig,
    registry: Arc<ContentRegistry>,
    search_vault: Arc<dyn SearchVault>,
) -> Result<Router> {
    let redirects: LegacyRedirects = Arc::new(config.redirects.clone());
    let state = ServerState::new(config.clone(), registry, search_vault);

    let api_routes: Router = make_content_routes(state.clone())
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .merge(make_search_routes(state.clone()));

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new()
            .route("/", get(home))
            .with_state(state.clone()),
    };

    let app: Router = home_router
        .nest("/api", api_routes)
        .merge(make_seo_routes(state.clone()))
        .layer(middleware::from_fn_with_state(redirects, legacy_redirects))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

pub async fn run_server(
    config: ServerConfig,
    registry: Arc<ContentRegistry>,
    search_vault: Arc<dyn SearchVault>,
) -> Result<()> {
    let port = config.port;
    let metrics_port = config.metrics_port;
    let app = make_app(config, registry, search_vault)?;

    let metrics_listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", metrics_port))
        .await
        .with_context(|| format!("Could not bind metrics port {}", metrics_port))?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Could not bind port {}", port))?;

    info!("Ready to serve at port {}!", port);
    info!("Metrics available at port {}!", metrics_port);

    let metrics_server = async {
        axum::serve(metrics_listener, make_metrics_app())
            .await
            .context("Metrics server failed")
    };
    let main_server = async {
        axum::serve(listener, app)
            .await
            .context("Server failed")
    };
    tokio::try_join!(main_server, metrics_server)?;
    Ok(())
}
