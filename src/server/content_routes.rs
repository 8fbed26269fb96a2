//! Read-only content API: calculators, categories, articles and standards.

use super::api_error::{internal_error, not_found};
use super::metrics::record_locale_fallback;
use super::state::{GuardedRegistry, ServerState};
use crate::content::{
    Article, ArticleSummary, Calculator, CalculatorSummary, Locale, Localized, Standard,
    StandardSummary,
};
use crate::registry::ContentRegistry;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct ContentQuery {
    pub locale: Option<String>,
    pub category: Option<String>,
    pub country: Option<String>,
}

/// Missing or blank `locale` means the default locale.
pub fn requested_locale(registry: &ContentRegistry, locale: Option<String>) -> String {
    non_blank(locale).unwrap_or_else(|| registry.default_locale().to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn note_fallback<T>(endpoint: &str, requested: &str, resolved: &Localized<T>) {
    if resolved.fallback_used {
        record_locale_fallback(endpoint, requested);
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CalculatorsResponse {
    calculators: Vec<CalculatorSummary>,
    count: usize,
    locale: Locale,
    fallback_locale_used: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CategoriesResponse {
    categories: Vec<String>,
    locale: Locale,
    fallback_locale_used: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ArticlesResponse {
    articles: Vec<ArticleSummary>,
    count: usize,
    locale: Locale,
    fallback_locale_used: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ArticleDetailResponse {
    article: Article,
    related_calculators: Vec<CalculatorSummary>,
    related_standards: Vec<StandardSummary>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct StandardsResponse {
    standards: Vec<StandardSummary>,
    count: usize,
    locale: Locale,
    fallback_locale_used: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct StandardDetailResponse {
    standard: Standard,
    related_calculators: Vec<CalculatorSummary>,
}

fn summaries<'a, T: 'a, S: From<&'a T>>(items: &'a [T]) -> Vec<S> {
    items.iter().map(S::from).collect()
}

async fn get_calculators(
    State(registry): State<GuardedRegistry>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    let resolved = match non_blank(query.category) {
        Some(category) => registry.calculators_by_category(&category, &locale),
        None => registry.calculators(&locale),
    };
    match resolved {
        Ok(resolved) => {
            note_fallback("calculators", &locale, &resolved);
            Json(CalculatorsResponse {
                calculators: summaries(&resolved.items),
                count: resolved.items.len(),
                locale: resolved.locale,
                fallback_locale_used: resolved.fallback_used,
            })
            .into_response()
        }
        Err(err) => internal_error("calculators", err),
    }
}

async fn get_calculator(
    State(registry): State<GuardedRegistry>,
    Path(id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    match registry.calculator_by_id(&id, &locale) {
        Ok(Some(calculator)) => Json::<Calculator>(calculator).into_response(),
        Ok(None) => not_found("Calculator", &id),
        Err(err) => internal_error("calculators", err),
    }
}

async fn get_categories(
    State(registry): State<GuardedRegistry>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    match registry.categories(&locale) {
        Ok(resolved) => {
            note_fallback("categories", &locale, &resolved);
            Json(CategoriesResponse {
                categories: resolved.items,
                locale: resolved.locale,
                fallback_locale_used: resolved.fallback_used,
            })
            .into_response()
        }
        Err(err) => internal_error("categories", err),
    }
}

async fn get_articles(
    State(registry): State<GuardedRegistry>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    match registry.articles(&locale) {
        Ok(resolved) => {
            note_fallback("articles", &locale, &resolved);
            Json(ArticlesResponse {
                articles: summaries(&resolved.items),
                count: resolved.items.len(),
                locale: resolved.locale,
                fallback_locale_used: resolved.fallback_used,
            })
            .into_response()
        }
        Err(err) => internal_error("articles", err),
    }
}

fn article_detail(
    registry: &ContentRegistry,
    id: &str,
    locale: &str,
) -> anyhow::Result<Option<ArticleDetailResponse>> {
    let article = match registry.article_by_id(id, locale)? {
        Some(article) => article,
        None => return Ok(None),
    };
    let related_calculators = registry.related_calculators(&article.related_calculators, locale)?;
    let related_standards = registry.related_standards(&article.related_standards, locale)?;
    Ok(Some(ArticleDetailResponse {
        related_calculators: summaries(&related_calculators),
        related_standards: summaries(&related_standards),
        article,
    }))
}

async fn get_article(
    State(registry): State<GuardedRegistry>,
    Path(id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    match article_detail(&registry, &id, &locale) {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => not_found("Article", &id),
        Err(err) => internal_error("articles", err),
    }
}

async fn get_standards(
    State(registry): State<GuardedRegistry>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    let resolved = match non_blank(query.country) {
        Some(country) => registry.standards_by_country(&country, &locale),
        None => registry.standards(&locale),
    };
    match resolved {
        Ok(resolved) => {
            note_fallback("standards", &locale, &resolved);
            Json(StandardsResponse {
                standards: summaries(&resolved.items),
                count: resolved.items.len(),
                locale: resolved.locale,
                fallback_locale_used: resolved.fallback_used,
            })
            .into_response()
        }
        Err(err) => internal_error("standards", err),
    }
}

fn standard_detail(
    registry: &ContentRegistry,
    id: &str,
    locale: &str,
) -> anyhow::Result<Option<StandardDetailResponse>> {
    let standard = match registry.standard_by_id(id, locale)? {
        Some(standard) => standard,
        None => return Ok(None),
    };
    let related_calculators =
        registry.related_calculators(&standard.related_calculators, locale)?;
    Ok(Some(StandardDetailResponse {
        related_calculators: summaries(&related_calculators),
        standard,
    }))
}

async fn get_standard(
    State(registry): State<GuardedRegistry>,
    Path(id): Path<String>,
    Query(query): Query<ContentQuery>,
) -> Response {
    let locale = requested_locale(&registry, query.locale);
    match standard_detail(&registry, &id, &locale) {
        Ok(Some(detail)) => Json(detail).into_response(),
        Ok(None) => not_found("Standard", &id),
        Err(err) => internal_error("standards", err),
    }
}

pub fn make_content_routes(state: ServerState) -> Router {
    Router::new()
        .route("/calculators", get(get_calculators))
        .route("/calculators/{id}", get(get_calculator))
        .route("/categories", get(get_categories))
        .route("/articles", get(get_articles))
        .route("/articles/{id}", get(get_article))
        .route("/standards", get(get_standards))
        .route("/standards/{id}", get(get_standard))
        .with_state(state)
}
