//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own content directory.

use super::constants::*;
use super::fixtures::create_test_content;
use calc_portal_server::config::{SearchEngine, SearchSettings};
use calc_portal_server::content::{load_content, Locale};
use calc_portal_server::content_store::StaticContentStore;
use calc_portal_server::registry::ContentRegistry;
use calc_portal_server::search::create_search_vault;
use calc_portal_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated content directory
///
/// When dropped, the server gracefully shuts down and the content directory is removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_content_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with substring search.
    pub async fn spawn() -> Self {
        Self::spawn_with_engine(SearchEngine::Substring).await
    }

    /// Spawns a new test server with the given search engine.
    ///
    /// # Panics
    ///
    /// Panics if the content fixture cannot be created or loaded, if binding
    /// fails, or if the server doesn't become ready within the timeout.
    pub async fn spawn_with_engine(engine: SearchEngine) -> Self {
        let temp_content_dir = create_test_content().expect("Failed to create test content");
        let bundle = load_content(temp_content_dir.path()).expect("Failed to load test content");

        let store = Arc::new(StaticContentStore::new(bundle));
        let registry = Arc::new(ContentRegistry::new(store, Locale::En));
        let search_vault = create_search_vault(&engine, registry.clone());

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let mut redirects = BTreeMap::new();
        redirects.insert(LEGACY_PATH.to_string(), LEGACY_TARGET.to_string());

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 60,
            frontend_dir_path: None,
            base_url: TEST_BASE_URL.to_string(),
            search: SearchSettings {
                engine,
                default_limit: 10,
                max_limit: 50,
            },
            redirects,
            ..Default::default()
        };

        let app = make_app(config, registry, search_vault).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _temp_content_dir: temp_content_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
