//! Simplified, API-facing views of the content records.

use super::{Article, Calculator, FieldDescriptor, Locale, Standard};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSummary {
    pub id: String,
    pub slug: String,
    pub category: String,
    pub title: String,
    pub short_description: String,
    pub locale: Locale,
    pub inputs: Vec<FieldDescriptor>,
    pub outputs: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardSummary {
    pub id: String,
    pub slug: String,
    pub country: String,
    pub title: String,
    pub short_description: String,
    pub locale: Locale,
}

impl From<&Calculator> for CalculatorSummary {
    fn from(calculator: &Calculator) -> Self {
        CalculatorSummary {
            id: calculator.id.clone(),
            slug: calculator.slug.clone(),
            category: calculator.category.clone(),
            title: calculator.title.clone(),
            short_description: calculator.description.clone(),
            locale: calculator.locale,
            inputs: calculator.inputs.clone(),
            outputs: calculator.outputs.clone(),
        }
    }
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        ArticleSummary {
            id: article.id.clone(),
            slug: article.slug.clone(),
            title: article.title.clone(),
            short_description: article.description.clone(),
            locale: article.locale,
        }
    }
}

impl From<&Standard> for StandardSummary {
    fn from(standard: &Standard) -> Self {
        StandardSummary {
            id: standard.id.clone(),
            slug: standard.slug.clone(),
            country: standard.country.clone(),
            title: standard.title.clone(),
            short_description: standard.description.clone(),
            locale: standard.locale,
        }
    }
}
