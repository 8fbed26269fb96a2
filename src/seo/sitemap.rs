//! XML sitemap covering every locale-native page of the portal.

use crate::content::Locale;
use crate::registry::ContentRegistry;
use anyhow::Result;
use chrono::NaiveDate;
use std::fmt::Write;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Section index pages, one per content type.
const SECTIONS: [&str; 3] = ["calculators", "articles", "standards"];

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn page_path(segments: &[&str]) -> String {
    let mut path = String::new();
    for segment in segments {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
    }
    path
}

struct SitemapEntry {
    path: String,
    lastmod: Option<NaiveDate>,
}

fn entries_for_locale(registry: &ContentRegistry, locale: Locale) -> Result<Vec<SitemapEntry>> {
    let tag = locale.as_str();
    let mut entries = vec![SitemapEntry {
        path: format!("/{}/", tag),
        lastmod: None,
    }];
    entries.extend(SECTIONS.iter().map(|section| SitemapEntry {
        path: format!("{}/", page_path(&[tag, section])),
        lastmod: None,
    }));

    for calculator in registry.native_calculators(locale)? {
        entries.push(SitemapEntry {
            path: page_path(&[tag, "calculators", &calculator.category, &calculator.slug]),
            lastmod: None,
        });
    }
    for article in registry.native_articles(locale)? {
        entries.push(SitemapEntry {
            path: page_path(&[tag, "articles", &article.slug]),
            lastmod: article.published,
        });
    }
    for standard in registry.native_standards(locale)? {
        entries.push(SitemapEntry {
            path: page_path(&[tag, "standards", &standard.country, &standard.slug]),
            lastmod: None,
        });
    }
    Ok(entries)
}

/// Renders the sitemap. Records are listed only under the locale they were
/// written in; fallback copies are never advertised.
///
/// Index pages carry `today` as their lastmod.
pub fn build_sitemap(registry: &ContentRegistry, base_url: &str, today: NaiveDate) -> Result<String> {
    let base_url = base_url.trim_end_matches('/');
    let mut xml = String::new();
    writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(xml, r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE)?;

    for locale in Locale::ALL {
        for entry in entries_for_locale(registry, locale)? {
            let lastmod = entry.lastmod.unwrap_or(today);
            writeln!(xml, "  <url>")?;
            writeln!(
                xml,
                "    <loc>{}</loc>",
                escape_xml(&format!("{}{}", base_url, entry.path))
            )?;
            writeln!(xml, "    <lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"))?;
            writeln!(xml, "  </url>")?;
        }
    }

    writeln!(xml, "</urlset>")?;
    Ok(xml)
}
