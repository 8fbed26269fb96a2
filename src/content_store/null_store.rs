//! Null content store implementation.
//!
//! Used when the portal is started without content, e.g. to serve only the
//! static frontend.

use super::trait_def::{ContentCounts, ContentStore};
use crate::content::{Article, Calculator, Locale, Standard};
use anyhow::Result;

/// A content store that holds nothing.
pub struct NullContentStore;

impl ContentStore for NullContentStore {
    fn get_calculators(&self, _locale: Locale) -> Result<Vec<Calculator>> {
        Ok(vec![])
    }

    fn get_articles(&self, _locale: Locale) -> Result<Vec<Article>> {
        Ok(vec![])
    }

    fn get_standards(&self, _locale: Locale) -> Result<Vec<Standard>> {
        Ok(vec![])
    }

    fn get_counts(&self) -> ContentCounts {
        ContentCounts::default()
    }
}
