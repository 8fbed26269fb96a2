//! ContentStore trait definition.
//!
//! The store is the read-only data provider behind the registry and the
//! search. Implementations never mutate after construction.

use crate::content::{Article, Calculator, ContentType, Locale, Standard};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of records per content type and locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentCounts {
    pub per_locale: BTreeMap<ContentType, BTreeMap<Locale, usize>>,
}

impl ContentCounts {
    pub fn total(&self) -> usize {
        self.per_locale
            .values()
            .flat_map(|locales| locales.values())
            .sum()
    }

    pub fn total_for(&self, content_type: ContentType) -> usize {
        self.per_locale
            .get(&content_type)
            .map(|locales| locales.values().sum())
            .unwrap_or(0)
    }
}

pub trait ContentStore: Send + Sync {
    /// Calculators native to `locale`, in load order. No fallback applied.
    fn get_calculators(&self, locale: Locale) -> Result<Vec<Calculator>>;

    /// Articles native to `locale`, in load order. No fallback applied.
    fn get_articles(&self, locale: Locale) -> Result<Vec<Article>>;

    /// Standards native to `locale`, in load order. No fallback applied.
    fn get_standards(&self, locale: Locale) -> Result<Vec<Standard>>;

    fn get_counts(&self) -> ContentCounts;
}
