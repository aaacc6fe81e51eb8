//! # Title Parser
//!
//! Runs the field extractors over one segmentation of the title and applies
//! the cross-field policies that no single extractor can decide alone.

use tracing::trace;

use crate::parser::episode::extract_episode_range;
use crate::parser::language::extract_languages;
use crate::parser::resolution::extract_resolution;
use crate::parser::segmenter::segment;
use crate::parser::subtitle_kind::extract_subtitle_kind;
use crate::types::{ParsedTitle, SubtitleKind, SubtitleLanguage};

/// Stateless handle over [`parse`], for code that stores a parser value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleParser;

impl TitleParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Same as [`parse`].
    #[must_use]
    pub fn parse(&self, title: &str) -> ParsedTitle {
        parse(title)
    }
}

/// Classifies a release title.
///
/// Never fails: fields that cannot be determined take their absence value.
/// Japanese is always part of the language set, and a title naming two or
/// more translated languages without a delivery keyword is soft-subbed.
///
/// # Examples
/// ```
/// use jimaku_core::parser::parse;
///
/// let parsed = parse("[四魂製作組][Mirai Nikki 未來日記][14&15][BIG5_GB繁簡][720P][MKV]");
/// let rendered = parsed.render();
///
/// assert_eq!(rendered.episode_range, "null");
/// assert_eq!(rendered.subtitle_languages, "CHS, CHT, JPN");
/// assert_eq!(rendered.resolution, "720P");
/// assert_eq!(rendered.subtitle_kind, "CLOSED");
/// ```
#[must_use]
pub fn parse(title: &str) -> ParsedTitle {
    let segments = segment(title);

    let mut subtitle_languages = extract_languages(&segments);
    let subtitle_kind = extract_subtitle_kind(&segments).or_else(|| {
        (subtitle_languages.translated_count() >= 2).then_some(SubtitleKind::Closed)
    });
    subtitle_languages.insert(SubtitleLanguage::Japanese);

    let parsed = ParsedTitle {
        episode_range: extract_episode_range(&segments),
        subtitle_languages,
        resolution: extract_resolution(&segments),
        subtitle_kind,
    };
    trace!(title, segments = segments.len(), %parsed, "parsed title");
    parsed
}
