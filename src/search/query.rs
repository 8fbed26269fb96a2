use unicode_segmentation::UnicodeSegmentation;

/// Queries shorter than this, in grapheme clusters after trimming, match nothing.
pub const MIN_QUERY_LENGTH: usize = 2;

/// A trimmed, lowercased query that is long enough to be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery(String);

impl NormalizedQuery {
    pub fn parse(raw: &str) -> Option<NormalizedQuery> {
        let trimmed = raw.trim();
        if trimmed.graphemes(true).count() < MIN_QUERY_LENGTH {
            return None;
        }
        Some(NormalizedQuery(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against any of `fields`.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(self.0.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_queries() {
        assert!(NormalizedQuery::parse("").is_none());
        assert!(NormalizedQuery::parse("   ").is_none());
        assert!(NormalizedQuery::parse(" a ").is_none());
        assert!(NormalizedQuery::parse("ab").is_some());
    }

    #[test]
    fn counts_graphemes_not_bytes() {
        // One Devanagari syllable spans several code points.
        assert!(NormalizedQuery::parse("कि").is_none());
        assert!(NormalizedQuery::parse("я").is_none());
        assert!(NormalizedQuery::parse("яб").is_some());
    }

    #[test]
    fn trims_and_lowercases() {
        let query = NormalizedQuery::parse("  Percent ").unwrap();
        assert_eq!(query.as_str(), "percent");
    }

    #[test]
    fn matches_case_insensitive_substrings() {
        let query = NormalizedQuery::parse("CALC").unwrap();
        assert!(query.matches_any(&["Percentage Calculator", ""]));
        assert!(query.matches_any(&["", "a calculation"]));
        assert!(!query.matches_any(&["Roman numerals", "convert"]));

        let cyrillic = NormalizedQuery::parse("ПРОЦЕНТ").unwrap();
        assert!(cyrillic.matches_any(&["Калькулятор процентов"]));
    }
}
