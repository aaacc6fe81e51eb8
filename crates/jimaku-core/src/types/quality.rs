use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Video resolution class of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resolution {
    /// 480p, standard definition
    SD480,
    /// 720p
    HD720,
    /// 1080p, full HD
    FHD1080,
    /// 1440p
    QHD1440,
    /// 2160p, also written `4K`
    UHD2160,
}

impl Resolution {
    /// All resolution classes, lowest first.
    pub const ALL: [Resolution; 5] = [
        Self::SD480,
        Self::HD720,
        Self::FHD1080,
        Self::QHD1440,
        Self::UHD2160,
    ];

    /// Canonical label used when rendering results: `"1080P"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SD480 => "480P",
            Self::HD720 => "720P",
            Self::FHD1080 => "1080P",
            Self::QHD1440 => "1440P",
            Self::UHD2160 => "2160P",
        }
    }

    /// Maps the numeric part of an explicit `NNNNp` token.
    #[must_use]
    pub fn from_lines(lines: u32) -> Option<Self> {
        match lines {
            480 => Some(Self::SD480),
            720 => Some(Self::HD720),
            1080 => Some(Self::FHD1080),
            1440 => Some(Self::QHD1440),
            2160 => Some(Self::UHD2160),
            _ => None,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not a resolution label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resolution label: {0:?}")]
pub struct UnknownResolution(pub String);

impl FromStr for Resolution {
    type Err = UnknownResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownResolution(s.to_string()))
    }
}
