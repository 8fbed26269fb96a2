//! Supported locales and the two-step locale resolution used by every lookup.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
    Es,
    Tr,
    Hi,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Ru, Locale::Es, Locale::Tr, Locale::Hi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
            Locale::Es => "es",
            Locale::Tr => "tr",
            Locale::Hi => "hi",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported locale \"{0}\"")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Locale::ALL
            .iter()
            .find(|l| l.as_str() == tag)
            .copied()
            .ok_or_else(|| LocaleParseError(s.to_string()))
    }
}

/// A collection resolved for a requested locale.
#[derive(Debug, Clone, PartialEq)]
pub struct Localized<T> {
    pub items: Vec<T>,
    pub locale: Locale,
    pub fallback_used: bool,
}

impl<T> Localized<T> {
    pub fn map_items<F>(self, f: F) -> Localized<T>
    where
        F: FnOnce(Vec<T>) -> Vec<T>,
    {
        Localized {
            items: f(self.items),
            locale: self.locale,
            fallback_used: self.fallback_used,
        }
    }
}

/// Resolves `requested` against a collection.
///
/// The requested locale is tried first. When it does not parse, or its
/// collection is empty, the `default_locale` collection is returned with
/// `fallback_used` set. An empty default-locale collection requested directly
/// is not a fallback.
pub fn resolve_localized<T, F>(requested: &str, default_locale: Locale, fetch: F) -> Result<Localized<T>>
where
    F: Fn(Locale) -> Result<Vec<T>>,
{
    if let Ok(locale) = requested.parse::<Locale>() {
        let items = fetch(locale)?;
        if !items.is_empty() || locale == default_locale {
            return Ok(Localized {
                items,
                locale,
                fallback_used: false,
            });
        }
    }

    Ok(Localized {
        items: fetch(default_locale)?,
        locale: default_locale,
        fallback_used: true,
    })
}
