mod http_cache;
mod legacy_redirects;
mod requests_logging;

pub use http_cache::http_cache;
pub use legacy_redirects::{legacy_redirects, LegacyRedirects};
pub use requests_logging::{log_requests, RequestsLoggingLevel};
