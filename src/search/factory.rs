//! Factory function for creating search vault instances

use super::{NoOpSearchVault, SearchVault, SubstringSearchVault};
use crate::config::SearchEngine;
use crate::registry::ContentRegistry;
use std::sync::Arc;
use tracing::info;

/// Create a search vault based on the configured search engine
///
/// # Arguments
/// * `engine` - The search engine type to create
/// * `registry` - The registry the vault searches through
pub fn create_search_vault(
    engine: &SearchEngine,
    registry: Arc<ContentRegistry>,
) -> Arc<dyn SearchVault> {
    match engine {
        SearchEngine::Substring => {
            info!("Creating substring search vault");
            Arc::new(SubstringSearchVault::new(registry))
        }
        SearchEngine::NoOp => {
            info!("Creating NoOp search vault (search disabled)");
            Arc::new(NoOpSearchVault)
        }
    }
}
