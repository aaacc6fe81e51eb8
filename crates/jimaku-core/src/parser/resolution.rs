//! Resolution extraction from explicit `1080p` tokens, `4K`, and pixel
//! dimensions such as `1920x1080`.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::segmenter::Segment;
use crate::types::Resolution;

static EXPLICIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^0-9])(2160|1440|1080|720|480)[pi]").expect("invalid resolution pattern")
});

static FOUR_K: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^0-9a-z])4K(?:$|[^0-9a-z])").expect("invalid 4K pattern")
});

static DIMENSIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{3,4})\s?[xX×*]\s?(\d{3,4})").expect("invalid dimension pattern")
});

/// Known `width x height` pairs.
const DIMENSION_TABLE: &[(u32, u32, Resolution)] = &[
    (640, 480, Resolution::SD480),
    (720, 480, Resolution::SD480),
    (848, 480, Resolution::SD480),
    (854, 480, Resolution::SD480),
    (1280, 720, Resolution::HD720),
    (1440, 1080, Resolution::FHD1080),
    (1920, 1080, Resolution::FHD1080),
    (2560, 1440, Resolution::QHD1440),
    (3840, 2160, Resolution::UHD2160),
    (4096, 2160, Resolution::UHD2160),
];

/// Returns the resolution of the first segment, in source order, that names
/// one. Unrecognized tokens (`576p`, `1024x576`) are skipped.
#[must_use]
pub fn extract_resolution(segments: &[Segment<'_>]) -> Option<Resolution> {
    segments.iter().find_map(|segment| resolution_in(segment.text))
}

fn resolution_in(text: &str) -> Option<Resolution> {
    explicit(text).or_else(|| dimensions(text))
}

fn explicit(text: &str) -> Option<Resolution> {
    let from_lines = EXPLICIT
        .captures_iter(text)
        .find_map(|caps| caps[1].parse().ok().and_then(Resolution::from_lines));
    from_lines.or_else(|| FOUR_K.is_match(text).then_some(Resolution::UHD2160))
}

fn dimensions(text: &str) -> Option<Resolution> {
    DIMENSIONS.captures_iter(text).find_map(|caps| {
        let width: u32 = caps[1].parse().ok()?;
        let height: u32 = caps[2].parse().ok()?;
        DIMENSION_TABLE
            .iter()
            .find(|(w, h, _)| *w == width && *h == height)
            .map(|(_, _, res)| *res)
    })
}
