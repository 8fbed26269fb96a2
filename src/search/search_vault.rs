//! Search vault trait and its implementations

use super::portal_search::{search_portal, PortalSearchResults};
use crate::registry::ContentRegistry;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Statistics about the search vault.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchVaultStats {
    /// Number of records the vault can match against, across all locales
    pub indexed_items: usize,
    /// Type of search engine (e.g., "Substring")
    pub index_type: String,
}

pub trait SearchVault: Send + Sync {
    fn search(
        &self,
        query: &str,
        locale: &str,
        limit_per_type: Option<usize>,
    ) -> Result<PortalSearchResults>;

    fn get_stats(&self) -> SearchVaultStats;
}

/// Case-insensitive substring matching over the registry, no ranking.
pub struct SubstringSearchVault {
    registry: Arc<ContentRegistry>,
}

impl SubstringSearchVault {
    pub fn new(registry: Arc<ContentRegistry>) -> SubstringSearchVault {
        SubstringSearchVault { registry }
    }
}

impl SearchVault for SubstringSearchVault {
    fn search(
        &self,
        query: &str,
        locale: &str,
        limit_per_type: Option<usize>,
    ) -> Result<PortalSearchResults> {
        search_portal(&self.registry, query, locale, limit_per_type)
    }

    fn get_stats(&self) -> SearchVaultStats {
        SearchVaultStats {
            indexed_items: self.registry.get_counts().total(),
            index_type: "Substring".to_string(),
        }
    }
}

/// A no-op search vault that returns empty results.
/// Used when search is disabled.
pub struct NoOpSearchVault;

impl SearchVault for NoOpSearchVault {
    fn search(
        &self,
        _query: &str,
        locale: &str,
        _limit_per_type: Option<usize>,
    ) -> Result<PortalSearchResults> {
        Ok(PortalSearchResults::empty(locale))
    }

    fn get_stats(&self) -> SearchVaultStats {
        SearchVaultStats {
            indexed_items: 0,
            index_type: "NoOp (disabled)".to_string(),
        }
    }
}
