//! Locale-aware lookups over a [`ContentStore`].
//!
//! Every collection lookup goes through [`resolve_localized`], so callers
//! always know which locale was served and whether it was a fallback.

use crate::content::{
    resolve_localized, Article, Calculator, Locale, Localized, LocalizedContent, Standard,
};
use crate::content_store::{ContentCounts, ContentStore};
use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

pub struct ContentRegistry {
    store: Arc<dyn ContentStore>,
    default_locale: Locale,
}

fn find_by_id<T: LocalizedContent>(items: Vec<T>, id: &str) -> Option<T> {
    items.into_iter().find(|item| item.id() == id)
}

fn resolve_references<T: LocalizedContent>(items: &[T], ids: &[String]) -> Vec<T> {
    ids.iter()
        .filter_map(|id| items.iter().find(|item| item.id() == id).cloned())
        .collect()
}

impl ContentRegistry {
    pub fn new(store: Arc<dyn ContentStore>, default_locale: Locale) -> ContentRegistry {
        ContentRegistry {
            store,
            default_locale,
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn get_counts(&self) -> ContentCounts {
        self.store.get_counts()
    }

    // =========================================================================
    // Calculators
    // =========================================================================

    pub fn calculators(&self, locale: &str) -> Result<Localized<Calculator>> {
        resolve_localized(locale, self.default_locale, |l| {
            self.store.get_calculators(l)
        })
    }

    pub fn calculators_by_category(
        &self,
        category: &str,
        locale: &str,
    ) -> Result<Localized<Calculator>> {
        Ok(self.calculators(locale)?.map_items(|items| {
            items
                .into_iter()
                .filter(|c| c.category == category)
                .collect()
        }))
    }

    pub fn calculator_by_id(&self, id: &str, locale: &str) -> Result<Option<Calculator>> {
        Ok(find_by_id(self.calculators(locale)?.items, id))
    }

    /// Distinct calculator categories, in the order they first appear.
    pub fn categories(&self, locale: &str) -> Result<Localized<String>> {
        let calculators = self.calculators(locale)?;
        let mut seen = HashSet::new();
        let categories = calculators
            .items
            .iter()
            .filter(|c| seen.insert(c.category.as_str()))
            .map(|c| c.category.clone())
            .collect();
        Ok(Localized {
            items: categories,
            locale: calculators.locale,
            fallback_used: calculators.fallback_used,
        })
    }

    /// Resolves soft references, dropping ids that do not exist.
    pub fn related_calculators(&self, ids: &[String], locale: &str) -> Result<Vec<Calculator>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        Ok(resolve_references(&self.calculators(locale)?.items, ids))
    }

    // =========================================================================
    // Articles
    // =========================================================================

    pub fn articles(&self, locale: &str) -> Result<Localized<Article>> {
        resolve_localized(locale, self.default_locale, |l| self.store.get_articles(l))
    }

    pub fn article_by_id(&self, id: &str, locale: &str) -> Result<Option<Article>> {
        Ok(find_by_id(self.articles(locale)?.items, id))
    }

    // =========================================================================
    // Standards
    // =========================================================================

    pub fn standards(&self, locale: &str) -> Result<Localized<Standard>> {
        resolve_localized(locale, self.default_locale, |l| self.store.get_standards(l))
    }

    pub fn standards_by_country(&self, country: &str, locale: &str) -> Result<Localized<Standard>> {
        Ok(self.standards(locale)?.map_items(|items| {
            items
                .into_iter()
                .filter(|s| s.country.eq_ignore_ascii_case(country))
                .collect()
        }))
    }

    pub fn standard_by_id(&self, id: &str, locale: &str) -> Result<Option<Standard>> {
        Ok(find_by_id(self.standards(locale)?.items, id))
    }

    pub fn related_standards(&self, ids: &[String], locale: &str) -> Result<Vec<Standard>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        Ok(resolve_references(&self.standards(locale)?.items, ids))
    }

    // =========================================================================
    // Locale-native access (no fallback), used for sitemaps
    // =========================================================================

    pub fn native_calculators(&self, locale: Locale) -> Result<Vec<Calculator>> {
        self.store.get_calculators(locale)
    }

    pub fn native_articles(&self, locale: Locale) -> Result<Vec<Article>> {
        self.store.get_articles(locale)
    }

    pub fn native_standards(&self, locale: Locale) -> Result<Vec<Standard>> {
        self.store.get_standards(locale)
    }
}
