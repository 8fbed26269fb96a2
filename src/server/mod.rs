mod api_error;
pub mod config;
mod content_routes;
mod http_layers;
pub mod metrics;
mod search;
mod seo_routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use search::make_search_routes;
pub use server::{make_app, make_metrics_app, run_server};
