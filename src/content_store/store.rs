use super::trait_def::{ContentCounts, ContentStore};
use crate::content::{Article, Calculator, ContentBundle, Locale, LocalizedContent, Standard};
use anyhow::Result;
use std::collections::HashMap;

fn group_by_locale<T: LocalizedContent>(items: Vec<T>) -> HashMap<Locale, Vec<T>> {
    let mut out: HashMap<Locale, Vec<T>> = HashMap::new();
    for item in items {
        out.entry(item.locale()).or_default().push(item);
    }
    out
}

/// In-memory store built once from a loaded [`ContentBundle`].
#[derive(Debug, Default)]
pub struct StaticContentStore {
    calculators: HashMap<Locale, Vec<Calculator>>,
    articles: HashMap<Locale, Vec<Article>>,
    standards: HashMap<Locale, Vec<Standard>>,
}

impl StaticContentStore {
    pub fn new(bundle: ContentBundle) -> StaticContentStore {
        StaticContentStore {
            calculators: group_by_locale(bundle.calculators),
            articles: group_by_locale(bundle.articles),
            standards: group_by_locale(bundle.standards),
        }
    }

    fn count<T>(map: &HashMap<Locale, Vec<T>>) -> impl Iterator<Item = (Locale, usize)> + '_ {
        map.iter().map(|(locale, items)| (*locale, items.len()))
    }
}

impl ContentStore for StaticContentStore {
    fn get_calculators(&self, locale: Locale) -> Result<Vec<Calculator>> {
        Ok(self.calculators.get(&locale).cloned().unwrap_or_default())
    }

    fn get_articles(&self, locale: Locale) -> Result<Vec<Article>> {
        Ok(self.articles.get(&locale).cloned().unwrap_or_default())
    }

    fn get_standards(&self, locale: Locale) -> Result<Vec<Standard>> {
        Ok(self.standards.get(&locale).cloned().unwrap_or_default())
    }

    fn get_counts(&self) -> ContentCounts {
        let mut counts = ContentCounts::default();
        counts.per_locale.insert(
            Calculator::CONTENT_TYPE,
            Self::count(&self.calculators).collect(),
        );
        counts
            .per_locale
            .insert(Article::CONTENT_TYPE, Self::count(&self.articles).collect());
        counts.per_locale.insert(
            Standard::CONTENT_TYPE,
            Self::count(&self.standards).collect(),
        );
        counts
    }
}
