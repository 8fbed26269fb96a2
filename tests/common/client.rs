//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per portal endpoint.
//! When API routes or query parameters change, update only this file.

use super::constants::*;
use reqwest::redirect::Policy;
use reqwest::Response;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    /// Redirects are not followed so tests can inspect them.
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .unwrap_or_else(|e| panic!("GET {} failed: {}", path, e))
    }

    /// GET an arbitrary path, query string included
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap_or_else(|e| panic!("GET {} failed: {}", path, e))
    }

    // ========================================================================
    // Content Endpoints
    // ========================================================================

    /// GET /api/calculators
    pub async fn get_calculators(&self, locale: Option<&str>, category: Option<&str>) -> Response {
        let mut query = vec![];
        if let Some(locale) = locale {
            query.push(("locale", locale));
        }
        if let Some(category) = category {
            query.push(("category", category));
        }
        self.get_with_query("/api/calculators", &query).await
    }

    /// GET /api/calculators/{id}
    pub async fn get_calculator(&self, id: &str, locale: Option<&str>) -> Response {
        let query: Vec<_> = locale.map(|l| ("locale", l)).into_iter().collect();
        self.get_with_query(&format!("/api/calculators/{}", id), &query)
            .await
    }

    /// GET /api/categories
    pub async fn get_categories(&self, locale: Option<&str>) -> Response {
        let query: Vec<_> = locale.map(|l| ("locale", l)).into_iter().collect();
        self.get_with_query("/api/categories", &query).await
    }

    /// GET /api/articles
    pub async fn get_articles(&self, locale: Option<&str>) -> Response {
        let query: Vec<_> = locale.map(|l| ("locale", l)).into_iter().collect();
        self.get_with_query("/api/articles", &query).await
    }

    /// GET /api/articles/{id}
    pub async fn get_article(&self, id: &str, locale: Option<&str>) -> Response {
        let query: Vec<_> = locale.map(|l| ("locale", l)).into_iter().collect();
        self.get_with_query(&format!("/api/articles/{}", id), &query)
            .await
    }

    /// GET /api/standards
    pub async fn get_standards(&self, locale: Option<&str>, country: Option<&str>) -> Response {
        let mut query = vec![];
        if let Some(locale) = locale {
            query.push(("locale", locale));
        }
        if let Some(country) = country {
            query.push(("country", country));
        }
        self.get_with_query("/api/standards", &query).await
    }

    /// GET /api/standards/{id}
    pub async fn get_standard(&self, id: &str, locale: Option<&str>) -> Response {
        let query: Vec<_> = locale.map(|l| ("locale", l)).into_iter().collect();
        self.get_with_query(&format!("/api/standards/{}", id), &query)
            .await
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// GET /api/search?q=&locale=
    pub async fn search(&self, q: &str, locale: &str) -> Response {
        self.get_with_query("/api/search", &[("q", q), ("locale", locale)])
            .await
    }

    /// GET /api/search?q=&locale=&limit=
    pub async fn search_with_limit(&self, q: &str, locale: &str, limit: &str) -> Response {
        self.get_with_query("/api/search", &[("q", q), ("locale", locale), ("limit", limit)])
            .await
    }

    // ========================================================================
    // SEO
    // ========================================================================

    /// GET /sitemap.xml
    pub async fn get_sitemap(&self) -> Response {
        self.get("/sitemap.xml").await
    }

    /// GET /robots.txt
    pub async fn get_robots(&self) -> Response {
        self.get("/robots.txt").await
    }
}
