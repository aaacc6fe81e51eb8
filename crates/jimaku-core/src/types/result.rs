use serde::{Deserialize, Serialize};

use super::episode::EpisodeRange;
use super::language::{SubtitleLanguage, SubtitleLanguageSet};
use super::quality::Resolution;
use super::subtitle::SubtitleKind;

/// Marker rendered for a field that could not be determined.
pub const ABSENT: &str = "null";

/// The output of classifying one release title.
///
/// Every field has a well-defined absence value, so a `ParsedTitle` is
/// produced for any input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTitle {
    /// Episodes covered by the release.
    pub episode_range: EpisodeRange,

    /// Subtitle languages present. Always contains Japanese.
    pub subtitle_languages: SubtitleLanguageSet,

    /// Video resolution.
    pub resolution: Option<Resolution>,

    /// Subtitle delivery kind.
    pub subtitle_kind: Option<SubtitleKind>,
}

impl ParsedTitle {
    /// Returns `true` if the title carries the given subtitle language.
    #[must_use]
    pub fn has_language(&self, language: SubtitleLanguage) -> bool {
        self.subtitle_languages.contains(language)
    }

    /// Renders every field with the canonical string forms used for
    /// logging and regression comparison.
    #[must_use]
    pub fn render(&self) -> RenderedTitle {
        RenderedTitle {
            episode_range: self.episode_range.to_string(),
            subtitle_languages: self.subtitle_languages.to_string(),
            resolution: self
                .resolution
                .map_or_else(|| ABSENT.to_string(), |r| r.label().to_string()),
            subtitle_kind: self
                .subtitle_kind
                .map_or_else(|| ABSENT.to_string(), |k| k.label().to_string()),
        }
    }
}

impl std::fmt::Display for ParsedTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedTitle(")?;
        write!(f, "ep={}", self.episode_range)?;
        write!(f, ", langs=[{}]", self.subtitle_languages)?;
        match self.resolution {
            Some(res) => write!(f, ", res={res}")?,
            None => write!(f, ", res={ABSENT}")?,
        }
        match self.subtitle_kind {
            Some(kind) => write!(f, ", kind={kind}")?,
            None => write!(f, ", kind={ABSENT}")?,
        }
        write!(f, ")")
    }
}

/// String rendering of a [`ParsedTitle`].
///
/// Episode ranges render as `low..high`, `S?` or `null`; languages as codes
/// joined by `", "` in code order; resolution and kind as their labels or
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTitle {
    pub episode_range: String,
    pub subtitle_languages: String,
    pub resolution: String,
    pub subtitle_kind: String,
}

impl RenderedTitle {
    /// Field names paired with expected/actual values, in declaration order.
    pub(crate) fn fields<'a>(
        &'a self,
        other: &'a RenderedTitle,
    ) -> [(&'static str, &'a str, &'a str); 4] {
        [
            (
                "episode_range",
                self.episode_range.as_str(),
                other.episode_range.as_str(),
            ),
            (
                "subtitle_languages",
                self.subtitle_languages.as_str(),
                other.subtitle_languages.as_str(),
            ),
            (
                "resolution",
                self.resolution.as_str(),
                other.resolution.as_str(),
            ),
            (
                "subtitle_kind",
                self.subtitle_kind.as_str(),
                other.subtitle_kind.as_str(),
            ),
        ]
    }
}
