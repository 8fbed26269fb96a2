use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Import modules from the library crate
use calc_portal_server::cli_style::get_styles;
use calc_portal_server::config::{self, SearchEngine};
use calc_portal_server::content::load_content;
use calc_portal_server::content_store::{ContentStore, StaticContentStore};
use calc_portal_server::registry::ContentRegistry;
use calc_portal_server::search::create_search_vault;
use calc_portal_server::server::{metrics, run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(format!("Error resolving path '{}': {}", s, msg));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory holding calculators/, articles/ and standards/.
    /// Can also be specified in config file.
    #[clap(long, value_parser = parse_path)]
    pub content_dir: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of content in the cache in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Public origin used in sitemap.xml and robots.txt.
    #[clap(long)]
    pub base_url: Option<String>,

    /// Load and validate the content, then exit without serving.
    #[clap(long)]
    pub check_only: bool,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            content_dir: args.content_dir.clone(),
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            frontend_dir_path: args.frontend_dir_path.clone(),
            base_url: args.base_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  content_dir: {:?}", app_config.content_dir);
    info!("  port: {}", app_config.port);
    info!("  default_locale: {}", app_config.default_locale);
    info!("  base_url: {}", app_config.base_url);
    info!("  search: {:?}", app_config.search);
    if !app_config.redirects.is_empty() {
        info!("  redirects: {}", app_config.redirects.len());
    }

    info!("Loading content from {:?}...", app_config.content_dir);
    let bundle = load_content(&app_config.content_dir)?;

    if cli_args.check_only {
        info!("Content is valid ({} records), exiting.", bundle.len());
        return Ok(());
    }

    let store = Arc::new(StaticContentStore::new(bundle));

    // Initialize metrics system
    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::init_content_metrics(&store.get_counts());

    let registry = Arc::new(ContentRegistry::new(store, app_config.default_locale));

    #[cfg(not(feature = "no_search"))]
    let engine = app_config.search.engine;
    #[cfg(feature = "no_search")]
    let engine = SearchEngine::NoOp;

    let search_vault = create_search_vault(&engine, registry.clone());
    if engine == SearchEngine::NoOp {
        info!("Search is disabled, /api/search will return empty results");
    }

    run_server(ServerConfig::from(&app_config), registry, search_vault).await
}
