use crate::parser::segmenter::Segment;
use crate::types::SubtitleKind;

/// Keywords in precedence order, simplified and traditional spellings.
const KEYWORDS: &[(&str, SubtitleKind)] = &[
    ("内嵌", SubtitleKind::Embedded),
    ("內嵌", SubtitleKind::Embedded),
    ("内封", SubtitleKind::Closed),
    ("內封", SubtitleKind::Closed),
    ("内挂", SubtitleKind::Closed),
    ("內掛", SubtitleKind::Closed),
    ("內挂", SubtitleKind::Closed),
    ("内掛", SubtitleKind::Closed),
    ("外挂", SubtitleKind::ExternalDiscover),
    ("外掛", SubtitleKind::ExternalDiscover),
];

/// Finds how subtitles are delivered.
///
/// Within one segment the earliest table entry wins; when several segments
/// carry a keyword the last of them decides.
#[must_use]
pub fn extract_subtitle_kind(segments: &[Segment<'_>]) -> Option<SubtitleKind> {
    segments.iter().rev().find_map(|segment| kind_in(segment.text))
}

fn kind_in(text: &str) -> Option<SubtitleKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, kind)| *kind)
}
