//! Portal search over calculators, articles and standards.

use super::query::NormalizedQuery;
use crate::content::{
    ArticleSummary, CalculatorSummary, Localized, LocalizedContent, StandardSummary,
};
use crate::registry::ContentRegistry;
use anyhow::Result;
use serde::Serialize;

/// Matches for one content type. `total` counts every match, ignoring the limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedResults<S> {
    pub items: Vec<S>,
    pub total: usize,
}

impl<S> TypedResults<S> {
    pub fn empty() -> TypedResults<S> {
        TypedResults {
            items: vec![],
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSearchResults {
    pub calculators: TypedResults<CalculatorSummary>,
    pub articles: TypedResults<ArticleSummary>,
    pub standards: TypedResults<StandardSummary>,
    pub fallback_locale_used: bool,
    pub used_locale: String,
}

impl PortalSearchResults {
    /// Empty results echoing the requested locale.
    pub fn empty(requested_locale: &str) -> PortalSearchResults {
        PortalSearchResults {
            calculators: TypedResults::empty(),
            articles: TypedResults::empty(),
            standards: TypedResults::empty(),
            fallback_locale_used: false,
            used_locale: requested_locale.to_string(),
        }
    }

    pub fn total(&self) -> usize {
        self.calculators.total + self.articles.total + self.standards.total
    }
}

fn collect_matches<T, S>(
    query: &NormalizedQuery,
    collection: &Localized<T>,
    limit: Option<usize>,
) -> TypedResults<S>
where
    T: LocalizedContent,
    S: for<'a> From<&'a T>,
{
    let matches: Vec<&T> = collection
        .items
        .iter()
        .filter(|item| query.matches_any(&[item.title(), item.description()]))
        .collect();
    let total = matches.len();
    let items = matches
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(S::from)
        .collect();
    TypedResults { items, total }
}

/// Searches the three collections independently.
///
/// Queries under two characters return empty results without touching the
/// registry. Each content type resolves its own locale; the response reports
/// a fallback if any of them fell back to the default locale.
pub fn search_portal(
    registry: &ContentRegistry,
    query: &str,
    locale: &str,
    limit: Option<usize>,
) -> Result<PortalSearchResults> {
    let query = match NormalizedQuery::parse(query) {
        Some(query) => query,
        None => return Ok(PortalSearchResults::empty(locale)),
    };

    let calculators = registry.calculators(locale)?;
    let articles = registry.articles(locale)?;
    let standards = registry.standards(locale)?;

    let fallback_locale_used =
        calculators.fallback_used || articles.fallback_used || standards.fallback_used;
    let used_locale = if fallback_locale_used {
        registry.default_locale()
    } else {
        calculators.locale
    };

    Ok(PortalSearchResults {
        calculators: collect_matches(&query, &calculators, limit),
        articles: collect_matches(&query, &articles, limit),
        standards: collect_matches(&query, &standards, limit),
        fallback_locale_used,
        used_locale: used_locale.to_string(),
    })
}
