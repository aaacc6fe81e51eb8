use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Subtitle languages recognized in release titles.
///
/// Variants are declared in the order of their codes, so the derived
/// ordering sorts by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubtitleLanguage {
    /// Simplified Chinese (`CHS`).
    ChineseSimplified,
    /// Traditional Chinese (`CHT`).
    ChineseTraditional,
    /// English (`ENG`).
    English,
    /// Japanese (`JPN`).
    Japanese,
}

impl SubtitleLanguage {
    /// All supported languages, in code order.
    pub const ALL: [SubtitleLanguage; 4] = [
        Self::ChineseSimplified,
        Self::ChineseTraditional,
        Self::English,
        Self::Japanese,
    ];

    /// Stable short code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ChineseSimplified => "CHS",
            Self::ChineseTraditional => "CHT",
            Self::English => "ENG",
            Self::Japanese => "JPN",
        }
    }

    /// Looks a language up by its code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for SubtitleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Deduplicated set of subtitle languages, iterated in code order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtitleLanguageSet(BTreeSet<SubtitleLanguage>);

impl SubtitleLanguageSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a language; returns `false` if it was already present.
    pub fn insert(&mut self, language: SubtitleLanguage) -> bool {
        self.0.insert(language)
    }

    #[must_use]
    pub fn contains(&self, language: SubtitleLanguage) -> bool {
        self.0.contains(&language)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members in code order.
    pub fn iter(&self) -> impl Iterator<Item = SubtitleLanguage> + '_ {
        self.0.iter().copied()
    }

    /// Number of members other than Japanese, the source-audio language.
    #[must_use]
    pub fn translated_count(&self) -> usize {
        self.iter()
            .filter(|l| *l != SubtitleLanguage::Japanese)
            .count()
    }
}

impl FromIterator<SubtitleLanguage> for SubtitleLanguageSet {
    fn from_iter<I: IntoIterator<Item = SubtitleLanguage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<SubtitleLanguage> for SubtitleLanguageSet {
    fn extend<I: IntoIterator<Item = SubtitleLanguage>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl fmt::Display for SubtitleLanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, language) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(language.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_codes() {
        let mut by_code = SubtitleLanguage::ALL;
        by_code.sort_by_key(|l| l.code());
        assert_eq!(by_code, SubtitleLanguage::ALL);

        let mut by_ord = SubtitleLanguage::ALL;
        by_ord.reverse();
        by_ord.sort();
        assert_eq!(by_ord, SubtitleLanguage::ALL);
    }

    #[test]
    fn code_lookup() {
        for language in SubtitleLanguage::ALL {
            assert_eq!(SubtitleLanguage::from_code(language.code()), Some(language));
        }
        assert_eq!(SubtitleLanguage::from_code("SPA"), None);
    }

    #[test]
    fn set_deduplicates_and_sorts() {
        let mut set = SubtitleLanguageSet::new();
        assert!(set.insert(SubtitleLanguage::Japanese));
        assert!(set.insert(SubtitleLanguage::ChineseTraditional));
        assert!(!set.insert(SubtitleLanguage::Japanese));
        set.extend([SubtitleLanguage::ChineseSimplified]);

        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "CHS, CHT, JPN");
    }

    #[test]
    fn empty_set_renders_empty() {
        assert_eq!(SubtitleLanguageSet::new().to_string(), "");
    }

    #[test]
    fn translated_count_skips_japanese() {
        let set: SubtitleLanguageSet = [SubtitleLanguage::Japanese, SubtitleLanguage::English]
            .into_iter()
            .collect();
        assert_eq!(set.translated_count(), 1);
    }

    #[test]
    fn set_serializes_as_list() {
        let set: SubtitleLanguageSet = [SubtitleLanguage::English, SubtitleLanguage::ChineseSimplified]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["ChineseSimplified","English"]"#);
        let back: SubtitleLanguageSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }
}
