use std::fmt;

use serde::{Deserialize, Serialize};

/// How subtitles are delivered with the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleKind {
    /// Burned into the video image (`内嵌`); cannot be turned off.
    Embedded,
    /// Muxed into the container as a selectable track (`内封`).
    Closed,
    /// Shipped as a separate file the player has to discover (`外挂`).
    ExternalDiscover,
}

impl SubtitleKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Embedded => "EMBEDDED",
            Self::Closed => "CLOSED",
            Self::ExternalDiscover => "EXTERNAL_DISCOVER",
        }
    }
}

impl fmt::Display for SubtitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
