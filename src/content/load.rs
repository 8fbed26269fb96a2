//! Content directory loading.

use super::{Article, Calculator, ContentType, LocalizedContent, Standard};
use anyhow::{bail, Result};
use rayon::prelude::*;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};
use walkdir::WalkDir;

/// Non-fatal issues found while loading the content directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("Missing content directory {0}")]
    MissingDirectory(String),

    #[error("Could not parse {path}: {reason}")]
    InvalidFile { path: String, reason: String },

    #[error("Invalid slug \"{slug}\" for {content_type} {id}")]
    InvalidSlug {
        content_type: ContentType,
        id: String,
        slug: String,
    },

    #[error("Duplicate {content_type} id {id} for locale {locale}")]
    DuplicateId {
        content_type: ContentType,
        id: String,
        locale: String,
    },
}

#[derive(Debug)]
struct Dirs {
    calculators: PathBuf,
    articles: PathBuf,
    standards: PathBuf,
}

impl Dirs {
    fn from_root(root: &Path) -> Result<Dirs> {
        if !root.is_dir() {
            bail!("{} is not a valid directory.", root.display());
        }

        Ok(Dirs {
            calculators: root.join(ContentType::Calculator.dir_name()),
            articles: root.join(ContentType::Article.dir_name()),
            standards: root.join(ContentType::Standard.dir_name()),
        })
    }
}

/// Everything read from a content directory, in file order.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub calculators: Vec<Calculator>,
    pub articles: Vec<Article>,
    pub standards: Vec<Standard>,
}

pub struct BuildResult {
    pub bundle: Option<ContentBundle>,
    pub problems: Vec<Problem>,
}

fn slug_regex() -> Regex {
    Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").expect("Invalid slug regex.")
}

fn list_json_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map(|e| e == "json").unwrap_or(false))
        .collect()
}

fn parse_collection<T>(dir: &Path, problems: &mut Vec<Problem>) -> Vec<T>
where
    T: LocalizedContent + DeserializeOwned,
{
    if !dir.is_dir() {
        problems.push(Problem::MissingDirectory(dir.display().to_string()));
        return vec![];
    }

    let parsed: Vec<(PathBuf, Result<Vec<T>>)> = list_json_files(dir)
        .into_par_iter()
        .map(|path| {
            let parsed = std::fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|text| serde_json::from_str::<Vec<T>>(&text).map_err(Into::into));
            (path, parsed)
        })
        .collect();

    let slug_regex = slug_regex();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut out = vec![];
    for (path, result) in parsed {
        let entries = match result {
            Ok(entries) => entries,
            Err(err) => {
                problems.push(Problem::InvalidFile {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        for entry in entries {
            if !slug_regex.is_match(entry.slug()) {
                problems.push(Problem::InvalidSlug {
                    content_type: T::CONTENT_TYPE,
                    id: entry.id().to_owned(),
                    slug: entry.slug().to_owned(),
                });
                continue;
            }
            let key = (entry.locale().to_string(), entry.id().to_owned());
            if !seen.insert(key) {
                problems.push(Problem::DuplicateId {
                    content_type: T::CONTENT_TYPE,
                    id: entry.id().to_owned(),
                    locale: entry.locale().to_string(),
                });
                continue;
            }
            out.push(entry);
        }
    }
    out
}

impl ContentBundle {
    pub fn build(root_dir: &Path) -> BuildResult {
        let dirs = match Dirs::from_root(root_dir) {
            Ok(dirs) => dirs,
            Err(err) => {
                return BuildResult {
                    bundle: None,
                    problems: vec![Problem::MissingDirectory(err.to_string())],
                }
            }
        };

        let mut problems = vec![];
        let calculators = parse_collection(&dirs.calculators, &mut problems);
        let articles = parse_collection(&dirs.articles, &mut problems);
        let standards = parse_collection(&dirs.standards, &mut problems);

        BuildResult {
            bundle: Some(ContentBundle {
                calculators,
                articles,
                standards,
            }),
            problems,
        }
    }

    pub fn len(&self) -> usize {
        self.calculators.len() + self.articles.len() + self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads the content directory, logging every problem found along the way.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<ContentBundle> {
    let build_result = ContentBundle::build(path.as_ref());
    let problems = build_result.problems;

    if !problems.is_empty() {
        warn!("Found {} content problems:", problems.len());
        for problem in problems.iter() {
            warn!("- {}", problem);
        }
    }

    match build_result.bundle {
        Some(bundle) => {
            info!(
                "Content has:\n{} calculators\n{} articles\n{} standards",
                bundle.calculators.len(),
                bundle.articles.len(),
                bundle.standards.len()
            );
            Ok(bundle)
        }
        None => bail!(
            "Could not load content from {}, check the {} problems above.",
            path.as_ref().display(),
            problems.len()
        ),
    }
}
