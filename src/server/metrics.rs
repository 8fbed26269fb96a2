use crate::content_store::ContentCounts;
use crate::search::{NormalizedQuery, PortalSearchResults};
use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, GaugeVec, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all portal metrics
const PREFIX: &str = "calc_portal";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "endpoint"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Search Metrics
    pub static ref SEARCH_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_search_requests_total"), "Search requests by outcome"),
        &["outcome"]
    ).expect("Failed to create search_requests_total metric");

    pub static ref SEARCH_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            format!("{PREFIX}_search_duration_seconds"),
            "Time spent matching a search query"
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1])
    ).expect("Failed to create search_duration_seconds metric");

    // Locale Metrics
    pub static ref LOCALE_FALLBACKS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(
            format!("{PREFIX}_locale_fallbacks_total"),
            "Responses served from the default locale instead of the requested one"
        ),
        &["endpoint", "requested_locale"]
    ).expect("Failed to create locale_fallbacks_total metric");

    // Content Metrics
    pub static ref CONTENT_ITEMS_TOTAL: GaugeVec = GaugeVec::new(
        Opts::new(format!("{PREFIX}_content_items_total"), "Loaded content records"),
        &["type", "locale"]
    ).expect("Failed to create content_items_total metric");

    // Error Metrics
    pub static ref ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_errors_total"), "Total errors by type and endpoint"),
        &["error_type", "endpoint"]
    ).expect("Failed to create errors_total metric");

    pub static ref PROCESS_MEMORY_BYTES: Gauge = Gauge::new(
        format!("{PREFIX}_process_memory_bytes"),
        "Process memory usage in bytes"
    ).expect("Failed to create process_memory_bytes metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(SEARCH_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(SEARCH_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(LOCALE_FALLBACKS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CONTENT_ITEMS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ERRORS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROCESS_MEMORY_BYTES.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize content gauges from the loaded store
pub fn init_content_metrics(counts: &ContentCounts) {
    for (content_type, locales) in counts.per_locale.iter() {
        for (locale, count) in locales.iter() {
            CONTENT_ITEMS_TOTAL
                .with_label_values(&[&content_type.to_string(), locale.as_str()])
                .set(*count as f64);
        }
    }

    tracing::info!("Content metrics initialized: {} records", counts.total());
}

/// Collapses request paths into a bounded set of labels.
pub fn categorize_endpoint(path: &str) -> &'static str {
    match path {
        "/" => "home",
        "/sitemap.xml" | "/robots.txt" => "seo",
        "/api/search" => "search",
        "/api/categories" => "categories",
        _ if path.starts_with("/api/calculators") => "calculators",
        _ if path.starts_with("/api/articles") => "articles",
        _ if path.starts_with("/api/standards") => "standards",
        _ if path.starts_with("/api/") => "api_other",
        _ => "static",
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let endpoint = categorize_endpoint(path);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, endpoint])
        .observe(duration.as_secs_f64());
}

/// `short_query`, `hit` or `miss`.
pub fn search_outcome(query: &str, results: &PortalSearchResults) -> &'static str {
    if NormalizedQuery::parse(query).is_none() {
        "short_query"
    } else if results.total() > 0 {
        "hit"
    } else {
        "miss"
    }
}

/// Record a completed search
pub fn record_search(outcome: &str, duration: Duration) {
    SEARCH_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
    SEARCH_DURATION_SECONDS.observe(duration.as_secs_f64());
}

/// Record a response served from the default locale
pub fn record_locale_fallback(endpoint: &str, requested_locale: &str) {
    // Arbitrary tags would explode cardinality.
    let requested = requested_locale
        .parse::<crate::content::Locale>()
        .map(|l| l.as_str())
        .unwrap_or("unsupported");
    LOCALE_FALLBACKS_TOTAL
        .with_label_values(&[endpoint, requested])
        .inc();
}

/// Record an error
pub fn record_error(error_type: &str, endpoint: &str) {
    ERRORS_TOTAL
        .with_label_values(&[error_type, endpoint])
        .inc();
}

/// Update process memory usage
pub fn update_memory_usage() {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            for line in status.lines() {
                if line.starts_with("VmRSS:") {
                    // RSS is reported in kB
                    if let Some(kb_str) = line.split_whitespace().nth(1) {
                        if let Ok(kb) = kb_str.parse::<f64>() {
                            PROCESS_MEMORY_BYTES.set(kb * 1024.0);
                            return;
                        }
                    }
                }
            }
        }
    }
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    update_memory_usage();

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
