//! Calculator Portal Server Library
//!
//! Content loading, locale-aware lookups, search and the HTTP surface of the
//! calculator portal, exposed for the binaries and integration tests.

pub mod cli_style;
pub mod config;
pub mod content;
pub mod content_store;
pub mod registry;
pub mod search;
pub mod seo;
pub mod server;

// Re-export commonly used types for convenience
pub use content::{load_content, ContentBundle, Locale};
pub use content_store::{ContentStore, StaticContentStore};
pub use registry::ContentRegistry;
pub use search::{create_search_vault, NoOpSearchVault, SearchVault, SubstringSearchVault};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
