mod file_config;

pub use file_config::{FileConfig, SearchConfig};

use crate::content::{Locale, DEFAULT_LOCALE};
use crate::server::RequestsLoggingLevel;
use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const MAX_SEARCH_LIMIT: usize = 50;

/// Search engine backing `/api/search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchEngine {
    #[default]
    Substring,
    #[value(name = "noop")]
    NoOp,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub content_dir: Option<PathBuf>,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub engine: SearchEngine,
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            engine: SearchEngine::default(),
            default_limit: DEFAULT_SEARCH_LIMIT,
            max_limit: MAX_SEARCH_LIMIT,
        }
    }
}

impl SearchSettings {
    /// `min(requested or default_limit, max_limit)`
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub content_dir: PathBuf,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub frontend_dir_path: Option<String>,
    /// Absolute origin used in sitemap and robots.txt, without a trailing slash.
    pub base_url: String,
    pub default_locale: Locale,

    // Feature configs (with defaults)
    pub search: SearchSettings,
    pub redirects: BTreeMap<String, String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        // TOML overrides CLI for each field
        let content_dir = file
            .content_dir
            .map(PathBuf::from)
            .or_else(|| cli.content_dir.clone())
            .ok_or_else(|| {
                anyhow!("content_dir must be specified via --content-dir or in config file")
            })?;

        if !content_dir.exists() {
            bail!("Content directory does not exist: {:?}", content_dir);
        }
        if !content_dir.is_dir() {
            bail!("content_dir is not a directory: {:?}", content_dir);
        }

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);
        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let base_url = file
            .base_url
            .or_else(|| cli.base_url.clone())
            .unwrap_or_else(|| format!("http://localhost:{}", port))
            .trim_end_matches('/')
            .to_string();

        let default_locale = match file.default_locale {
            Some(tag) => tag.parse::<Locale>()?,
            None => DEFAULT_LOCALE,
        };

        let search_file = file.search.unwrap_or_default();
        let engine = match search_file.engine {
            Some(name) => parse_search_engine(&name)
                .ok_or_else(|| anyhow!("Unknown search engine: {}", name))?,
            None => SearchEngine::default(),
        };
        let search = SearchSettings {
            engine,
            default_limit: search_file.default_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            max_limit: search_file.max_limit.unwrap_or(MAX_SEARCH_LIMIT),
        };
        if search.default_limit > search.max_limit {
            bail!(
                "search.default_limit ({}) exceeds search.max_limit ({})",
                search.default_limit,
                search.max_limit
            );
        }

        let redirects = file.redirects.unwrap_or_default();
        for (from, to) in redirects.iter() {
            if !from.starts_with('/') || !to.starts_with('/') {
                bail!("Redirect paths must start with '/': {} -> {}", from, to);
            }
        }

        Ok(Self {
            content_dir,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            frontend_dir_path,
            base_url,
            default_locale,
            search,
            redirects,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn parse_search_engine(s: &str) -> Option<SearchEngine> {
    SearchEngine::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_temp_content_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    fn cli_with_dir(dir: &TempDir) -> CliConfig {
        CliConfig {
            content_dir: Some(dir.path().to_path_buf()),
            port: 3001,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_logging_level() {
        assert!(matches!(
            parse_logging_level("none"),
            Some(RequestsLoggingLevel::None)
        ));
        assert!(matches!(
            parse_logging_level("body"),
            Some(RequestsLoggingLevel::Body)
        ));
        // Case insensitive
        assert!(matches!(
            parse_logging_level("PATH"),
            Some(RequestsLoggingLevel::Path)
        ));
        assert!(parse_logging_level("invalid").is_none());
    }

    #[test]
    fn test_parse_search_engine() {
        assert_eq!(parse_search_engine("substring"), Some(SearchEngine::Substring));
        assert_eq!(parse_search_engine("noop"), Some(SearchEngine::NoOp));
        assert_eq!(parse_search_engine("NOOP"), Some(SearchEngine::NoOp));
        assert_eq!(parse_search_engine("fts5"), None);
    }

    #[test]
    fn test_resolve_cli_only() {
        let temp_dir = make_temp_content_dir();
        let cli = CliConfig {
            content_dir: Some(temp_dir.path().to_path_buf()),
            port: 3001,
            metrics_port: 9091,
            logging_level: RequestsLoggingLevel::Headers,
            content_cache_age_sec: 7200,
            frontend_dir_path: Some("/frontend".to_string()),
            base_url: Some("https://calc.example.com/".to_string()),
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.content_dir, temp_dir.path());
        assert_eq!(config.port, 3001);
        assert_eq!(config.metrics_port, 9091);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Headers);
        assert_eq!(config.content_cache_age_sec, 7200);
        assert_eq!(config.frontend_dir_path, Some("/frontend".to_string()));
        assert_eq!(config.base_url, "https://calc.example.com");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.search, SearchSettings::default());
        assert!(config.redirects.is_empty());
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let temp_dir = make_temp_content_dir();
        let cli = CliConfig {
            content_dir: Some(PathBuf::from("/should/be/overridden")),
            port: 3001,
            metrics_port: 9091,
            logging_level: RequestsLoggingLevel::Path,
            content_cache_age_sec: 3600,
            ..Default::default()
        };

        let file_config = FileConfig {
            content_dir: Some(temp_dir.path().to_string_lossy().to_string()),
            port: Some(4000),
            logging_level: Some("body".to_string()),
            default_locale: Some("es".to_string()),
            search: Some(SearchConfig {
                engine: Some("noop".to_string()),
                default_limit: Some(3),
                max_limit: None,
            }),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        // TOML values should override CLI
        assert_eq!(config.content_dir, temp_dir.path());
        assert_eq!(config.port, 4000);
        assert_eq!(config.logging_level, RequestsLoggingLevel::Body);
        assert_eq!(config.default_locale, Locale::Es);
        assert_eq!(config.search.engine, SearchEngine::NoOp);
        assert_eq!(config.search.default_limit, 3);
        assert_eq!(config.search.max_limit, MAX_SEARCH_LIMIT);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.metrics_port, 9091);
        assert_eq!(config.content_cache_age_sec, 3600);
        // Derived from the resolved port
        assert_eq!(config.base_url, "http://localhost:4000");
    }

    #[test]
    fn test_resolve_missing_content_dir_error() {
        let result = AppConfig::resolve(&CliConfig::default(), None);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("content_dir must be specified"));
    }

    #[test]
    fn test_resolve_nonexistent_content_dir_error() {
        let cli = CliConfig {
            content_dir: Some(PathBuf::from("/nonexistent/path/that/should/not/exist")),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_content_dir_not_directory_error() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let cli = CliConfig {
            content_dir: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_resolve_rejects_unknown_locale() {
        let temp_dir = make_temp_content_dir();
        let file_config = FileConfig {
            default_locale: Some("fr".to_string()),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli_with_dir(&temp_dir), Some(file_config)).is_err());
    }

    #[test]
    fn test_resolve_rejects_unknown_engine() {
        let temp_dir = make_temp_content_dir();
        let file_config = FileConfig {
            search: Some(SearchConfig {
                engine: Some("elastic".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli_with_dir(&temp_dir), Some(file_config));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown search engine"));
    }

    #[test]
    fn test_resolve_rejects_inverted_limits() {
        let temp_dir = make_temp_content_dir();
        let file_config = FileConfig {
            search: Some(SearchConfig {
                engine: None,
                default_limit: Some(100),
                max_limit: Some(20),
            }),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli_with_dir(&temp_dir), Some(file_config)).is_err());
    }

    #[test]
    fn test_resolve_rejects_relative_redirects() {
        let temp_dir = make_temp_content_dir();
        let mut redirects = BTreeMap::new();
        redirects.insert("old-page".to_string(), "/en/".to_string());
        let file_config = FileConfig {
            redirects: Some(redirects),
            ..Default::default()
        };
        assert!(AppConfig::resolve(&cli_with_dir(&temp_dir), Some(file_config)).is_err());
    }

    #[test]
    fn test_effective_limit() {
        let search = SearchSettings::default();
        assert_eq!(search.effective_limit(None), DEFAULT_SEARCH_LIMIT);
        assert_eq!(search.effective_limit(Some(3)), 3);
        assert_eq!(search.effective_limit(Some(0)), 0);
        assert_eq!(search.effective_limit(Some(10_000)), MAX_SEARCH_LIMIT);
    }
}
