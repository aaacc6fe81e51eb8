//! # Episode-Range Extractor
//!
//! Rules are tried in fixed precedence (range, single, season, special,
//! volume, batch). Each rule scans every candidate segment before the next
//! rule is consulted, so an explicit number anywhere beats a special marker
//! anywhere. Candidates are visited bracketed first, then plain words that
//! follow a dash (`Title - 03`), then the remaining plain words.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::trace;

use crate::parser::segmenter::Segment;
use crate::types::{EpisodeNumber, EpisodeRange, EpisodeSort, SpecialKind};

/// Release-season announcements such as `1月新番` or `★01月新番★`.
static ANNOUNCEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:★.*|★?)(?:[0-9]{1,2}|[一二三四五六七八九十]{1,3}) ?[月年] ?(?:新番|日剧|日劇)★?$")
        .expect("invalid announcement pattern")
});

/// Decorations around an episode number: `第02話`, `12v2`, `26_END`, `12(完)`.
static DECORATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)第|\(完\)|_?(?:完|END|FIN)|[话集話]|_?v[0-9]|版")
        .expect("invalid decoration pattern")
});

/// Codec and pixel-dimension tokens whose digits are never episodes.
static NOT_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)x26[45]|\d{3,4}\s?[x×*]\s?\d{3,4}").expect("invalid exclusion pattern")
});

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<start>(?:SP|EP|E)?\d{1,4})\s?(?:-{1,2}|~|～|_)\s?(?P<end>(?:SP|EP|E)?\d{1,4})(?P<tail>p)?(?:TV|BDrip|BD)?(?P<extra>\+.+)?",
    )
    .expect("invalid range pattern")
});

static SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}$").expect("invalid single episode pattern"));

static SEASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^S(?P<season>\d{1,2})(?:E(?P<episode>\d{1,4}))?$")
        .expect("invalid season pattern")
});

static SPECIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)SP|OVA|OAD|小剧场|特别篇|番外篇").expect("invalid special pattern")
});

static VOLUME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bVol\.?\s*\d+").expect("invalid volume pattern"));

static BATCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)BD|Blu-Ray").expect("invalid batch pattern"));

const RECRUITMENT_NOISE: &[&str] = &["招募", "招新"];

const DASHES: &[&str] = &["-", "–", "—"];

/// A segment prepared for episode matching.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    /// Segment text without recruitment noise.
    text: String,
    /// `text` without decorations around the number.
    number_text: String,
    /// Whether numeric rules may look at this segment.
    numeric: bool,
}

impl Candidate {
    fn prepare(segment: &Segment<'_>) -> Option<Self> {
        let trimmed = segment.text.trim();
        if ANNOUNCEMENT.is_match(trimmed) {
            return None;
        }
        let text = RECRUITMENT_NOISE
            .iter()
            .fold(trimmed.to_string(), |acc, noise| acc.replace(noise, ""))
            .trim()
            .to_string();
        if text.is_empty() {
            return None;
        }
        let number_text = DECORATION.replace_all(&text, "").trim().to_string();
        let numeric = !NOT_EPISODE.is_match(&text);
        Some(Self {
            text,
            number_text,
            numeric,
        })
    }
}

type Rule = fn(&Candidate) -> Option<EpisodeRange>;

/// Episode rules in precedence order.
const RULES: &[(&str, Rule)] = &[
    ("range", range_rule),
    ("single", single_rule),
    ("season", season_rule),
    ("special", special_rule),
    ("volume", volume_rule),
    ("batch", batch_rule),
];

/// Extracts the episode range from a segmented title.
///
/// Returns [`EpisodeRange::Unknown`] when no rule matches.
#[must_use]
pub fn extract_episode_range(segments: &[Segment<'_>]) -> EpisodeRange {
    let candidates = ranked_candidates(segments);

    RULES
        .iter()
        .find_map(|(name, rule)| {
            candidates
                .iter()
                .find_map(rule)
                .inspect(|range| trace!(rule = *name, %range, "episode rule matched"))
        })
        .unwrap_or(EpisodeRange::Unknown)
}

fn ranked_candidates(segments: &[Segment<'_>]) -> Vec<Candidate> {
    let mut ranked: Vec<(u8, usize, Candidate)> = segments
        .iter()
        .enumerate()
        .filter_map(|(i, segment)| {
            let rank = if segment.bracketed {
                0
            } else if follows_dash(segments, i) {
                1
            } else {
                2
            };
            Candidate::prepare(segment).map(|c| (rank, segment.order, c))
        })
        .collect();
    ranked.sort_by_key(|(rank, order, _)| (*rank, *order));
    ranked.into_iter().map(|(_, _, c)| c).collect()
}

fn follows_dash(segments: &[Segment<'_>], index: usize) -> bool {
    index
        .checked_sub(1)
        .and_then(|prev| segments.get(prev))
        .is_some_and(|prev| !prev.bracketed && DASHES.contains(&prev.text))
}

fn range_rule(candidate: &Candidate) -> Option<EpisodeRange> {
    if !candidate.numeric {
        return None;
    }
    let text = candidate.number_text.as_str();
    RANGE.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        // "MP4_720" is not a range; neither is "01-1080p".
        if glued_to_previous(text, whole.start()) || caps.name("tail").is_some() {
            return None;
        }
        build_range(&caps)
    })
}

fn glued_to_previous(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric())
}

fn split_prefix(token: &str) -> (&str, &str) {
    let split = token
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(token.len());
    token.split_at(split)
}

fn build_range(caps: &Captures<'_>) -> Option<EpisodeRange> {
    let (prefix, start) = split_prefix(caps.name("start")?.as_str());
    let (end_prefix, end) = split_prefix(caps.name("end")?.as_str());
    if !end_prefix.is_empty() && !end_prefix.eq_ignore_ascii_case(prefix) {
        return None;
    }

    let range = match SpecialKind::from_prefix(prefix) {
        // "SP1-5": the prefix applies to both bounds.
        Some(kind) => EpisodeRange::numeric(
            EpisodeSort::Special {
                kind,
                number: Some(EpisodeNumber::from_digits(start)?),
            },
            EpisodeSort::Special {
                kind,
                number: Some(EpisodeNumber::from_digits(end)?),
            },
        )?,
        // "Euphonium 3 - 02": a padded end after an unpadded start is the episode.
        None if end.starts_with('0') && !start.starts_with('0') => {
            EpisodeRange::single(EpisodeSort::Normal(EpisodeNumber::from_digits(end)?))
        }
        None => EpisodeRange::numeric(
            EpisodeSort::Normal(EpisodeNumber::from_digits(start)?),
            EpisodeSort::Normal(EpisodeNumber::from_digits(end)?),
        )?,
    };

    match caps.name("extra") {
        Some(extra) => {
            let mut parts = vec![range];
            parts.extend(
                extra
                    .as_str()
                    .split('+')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(|part| EpisodeRange::Special(part.to_string())),
            );
            Some(EpisodeRange::combined(parts))
        }
        None => Some(range),
    }
}

fn single_rule(candidate: &Candidate) -> Option<EpisodeRange> {
    if !candidate.numeric || !SINGLE.is_match(&candidate.number_text) {
        return None;
    }
    let number = EpisodeNumber::from_digits(&candidate.number_text)?;
    Some(EpisodeRange::single(EpisodeSort::Normal(number)))
}

/// `S2`, `S1E05`, `S1+S2`, `S1+SP`.
fn season_rule(candidate: &Candidate) -> Option<EpisodeRange> {
    let mut parts = candidate.number_text.split('+').map(str::trim);
    let first = season_part(parts.next()?)?;

    let mut ranges = vec![first];
    for part in parts.filter(|p| !p.is_empty()) {
        let range = season_part(part).unwrap_or_else(|| {
            if part.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("SP")) {
                EpisodeRange::Special(part.to_string())
            } else {
                EpisodeRange::SeasonUnknown
            }
        });
        ranges.push(range);
    }
    Some(EpisodeRange::combined(ranges))
}

fn season_part(part: &str) -> Option<EpisodeRange> {
    let caps = SEASON.captures(part)?;
    if let Some(episode) = caps.name("episode") {
        let number = EpisodeNumber::from_digits(episode.as_str())?;
        return Some(EpisodeRange::single(EpisodeSort::Normal(number)));
    }
    let season = caps.name("season")?.as_str().parse().ok()?;
    Some(EpisodeRange::Season(season))
}

/// Echoes the whole segment back: `OVA`, `番外篇`, `PC&PSP兼容MP4`.
fn special_rule(candidate: &Candidate) -> Option<EpisodeRange> {
    SPECIAL
        .is_match(&candidate.text)
        .then(|| EpisodeRange::Special(candidate.text.clone()))
}

fn volume_rule(candidate: &Candidate) -> Option<EpisodeRange> {
    VOLUME
        .is_match(&candidate.text)
        .then_some(EpisodeRange::SeasonUnknown)
}

fn batch_rule(candidate: &Candidate) -> Option<EpisodeRange> {
    BATCH
        .is_match(&candidate.text)
        .then_some(EpisodeRange::SeasonUnknown)
}
