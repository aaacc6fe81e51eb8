//! # Jimaku Core
//!
//! Rule-based classification of anime fansub release titles. A title is
//! segmented once into bracket groups and plain words; independent
//! extractors then read the episode range, subtitle languages, resolution
//! and subtitle delivery kind from the segments.
//!
//! ## Quick Start
//!
//! ```rust
//! use jimaku_core::{parse, SubtitleLanguage};
//!
//! let parsed = parse("未来日记 Mirai Nikki 1-26+OVA [BD 1920x1080 HEVC 10bit][简繁内封字幕][2011年]");
//! let rendered = parsed.render();
//!
//! assert_eq!(rendered.episode_range, "01..26+OVA");
//! assert_eq!(rendered.subtitle_languages, "CHS, CHT, JPN");
//! assert_eq!(rendered.resolution, "1080P");
//! assert_eq!(rendered.subtitle_kind, "CLOSED");
//! assert!(parsed.has_language(SubtitleLanguage::Japanese));
//! ```
pub mod corpus;
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use corpus::{CorpusCase, CorpusReport, Mismatch, check, load_cases, load_file};
pub use error::{JimakuError, Result};
pub use parser::{Segment, TitleParser, parse, segment};
pub use types::{
    ABSENT, EpisodeNumber, EpisodeRange, EpisodeSort, ParsedTitle, RenderedTitle, Resolution,
    SpecialKind, SubtitleKind, SubtitleLanguage, SubtitleLanguageSet, UnknownResolution,
};
