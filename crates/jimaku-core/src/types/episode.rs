use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An episode number as written in a release title.
///
/// Keeps the digit count of the source so that `009` renders back as `009`.
/// Anything shorter than two digits is padded to two (`1` renders as `01`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeNumber {
    /// Numeric value.
    pub value: u32,
    /// Number of digits in the source text.
    pub width: u8,
}

impl EpisodeNumber {
    /// Builds a number with the minimum display width.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self { value, width: 2 }
    }

    /// Parses a run of ASCII digits, remembering its width.
    ///
    /// Returns `None` for empty input, non-digits or values that overflow.
    #[must_use]
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = digits.parse().ok()?;
        let width = u8::try_from(digits.len()).ok()?;
        Some(Self { value, width })
    }
}

impl fmt::Display for EpisodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.width.max(2));
        write!(f, "{:0width$}", self.value)
    }
}

/// Non-numbered episode types that can still carry a number (`SP03`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Special (`SP`).
    Sp,
    /// Original Video Animation.
    Ova,
    /// Original Animation DVD.
    Oad,
}

impl SpecialKind {
    /// Matches the upper-cased prefix of an episode token.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_uppercase().as_str() {
            "SP" => Some(Self::Sp),
            "OVA" => Some(Self::Ova),
            "OAD" => Some(Self::Oad),
            _ => None,
        }
    }
}

impl fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sp => write!(f, "SP"),
            Self::Ova => write!(f, "OVA"),
            Self::Oad => write!(f, "OAD"),
        }
    }
}

/// One bound of an episode range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeSort {
    /// Regular episode: `01`, `12`, `1084`.
    Normal(EpisodeNumber),
    /// Special episode, optionally numbered: `SP02`, `OVA`.
    Special {
        /// Special episode type.
        kind: SpecialKind,
        /// Number within that type, if any.
        number: Option<EpisodeNumber>,
    },
}

impl EpisodeSort {
    /// Compares two bounds of the same kind. Bounds of different kinds
    /// (a normal episode against a special) are not comparable.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Normal(a), Self::Normal(b)) => Some(a.value.cmp(&b.value)),
            (
                Self::Special {
                    kind: ka,
                    number: Some(a),
                },
                Self::Special {
                    kind: kb,
                    number: Some(b),
                },
            ) if ka == kb => Some(a.value.cmp(&b.value)),
            _ => None,
        }
    }
}

impl fmt::Display for EpisodeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(number) => write!(f, "{number}"),
            Self::Special { kind, number } => {
                write!(f, "{kind}")?;
                if let Some(number) = number {
                    write!(f, "{number}")?;
                }
                Ok(())
            }
        }
    }
}

/// Episode coverage of a release, as extracted from its title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeRange {
    /// Inclusive range of numbered episodes; a single episode has
    /// `low == high`. Always satisfies `low <= high`.
    Numeric {
        /// First episode.
        low: EpisodeSort,
        /// Last episode.
        high: EpisodeSort,
    },
    /// Literal marker used in place of a number (`OVA`, `番外篇`, or a
    /// bracket text that could not be resolved further).
    Special(String),
    /// A whole season: `S2`.
    Season(u32),
    /// A batch or volume release without per-episode numbering.
    SeasonUnknown,
    /// Several ranges joined in the title by `+`: `01-26+OVA`.
    Combined(Vec<EpisodeRange>),
    /// Nothing could be extracted.
    Unknown,
}

impl EpisodeRange {
    /// Builds a range, rejecting reversed or incomparable bounds.
    #[must_use]
    pub fn numeric(low: EpisodeSort, high: EpisodeSort) -> Option<Self> {
        match low.compare(&high)? {
            Ordering::Greater => None,
            _ => Some(Self::Numeric { low, high }),
        }
    }

    /// A single episode: both bounds equal.
    #[must_use]
    pub fn single(sort: EpisodeSort) -> Self {
        Self::Numeric {
            low: sort,
            high: sort,
        }
    }

    /// Joins parts into one range, flattening nested combinations.
    /// A single part is returned as is.
    #[must_use]
    pub fn combined(parts: Vec<EpisodeRange>) -> Self {
        let mut flat = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Self::Combined(inner) => flat.extend(inner),
                Self::Unknown => {}
                other => flat.push(other),
            }
        }
        match flat.len() {
            0 => Self::Unknown,
            1 => flat.remove(0),
            _ => Self::Combined(flat),
        }
    }

    /// Returns `true` unless this is [`EpisodeRange::Unknown`].
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    fn fmt_part(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Special(tag) => write!(f, "{tag}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for EpisodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric { low, high } => write!(f, "{low}..{high}"),
            Self::Special(tag) => write!(f, "{tag}..{tag}"),
            Self::Season(season) => write!(f, "S{season}"),
            Self::SeasonUnknown => write!(f, "S?"),
            Self::Combined(parts) => {
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    part.fmt_part(f)?;
                }
                Ok(())
            }
            Self::Unknown => write!(f, "null"),
        }
    }
}
