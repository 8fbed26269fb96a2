//! Shared constants for end-to-end tests
//!
//! When the fixture content changes, update only this file.

// ============================================================================
// Calculators
// ============================================================================

/// "Percentage Calculator", translated into Spanish and Russian
pub const PERCENT_OF_ID: &str = "percent-of";

/// "Percent Change Calculator", English only
pub const PERCENT_CHANGE_ID: &str = "percent-change";

/// "VAT Calculator", English and Spanish
pub const VAT_ID: &str = "vat";

pub const PERCENT_OF_TITLE_EN: &str = "Percentage Calculator";
pub const PERCENT_OF_TITLE_ES: &str = "Calculadora de porcentajes";
pub const PERCENT_OF_SLUG_ES: &str = "porcentaje-de-un-numero";

// ============================================================================
// Articles
// ============================================================================

/// Relates to percent-of, a missing calculator and iso-80000-1
pub const PERCENT_GUIDE_ID: &str = "percent-guide";
pub const PERCENT_GUIDE_SLUG_EN: &str = "how-percentages-work";
pub const PERCENT_GUIDE_PUBLISHED: &str = "2024-03-18";

/// English only, its description contains an ampersand
pub const VAT_EXPLAINED_ID: &str = "vat-explained";

// ============================================================================
// Standards (English only)
// ============================================================================

pub const ISO_80000_ID: &str = "iso-80000-1";
pub const DIN_1333_ID: &str = "din-1333";

/// Calculator id referenced by the percent guide but absent from the content
pub const MISSING_CALCULATOR_ID: &str = "compound-interest";

// ============================================================================
// Server configuration
// ============================================================================

pub const TEST_BASE_URL: &str = "https://calc.example.com";

pub const LEGACY_PATH: &str = "/calculators/percent";
pub const LEGACY_TARGET: &str = "/en/calculators/percentages/percentage-calculator";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
