pub mod episode;
pub mod language;
pub mod quality;
pub mod result;
pub mod subtitle;

pub use episode::{EpisodeNumber, EpisodeRange, EpisodeSort, SpecialKind};
pub use language::{SubtitleLanguage, SubtitleLanguageSet};
pub use quality::{Resolution, UnknownResolution};
pub use result::{ABSENT, ParsedTitle, RenderedTitle};
pub use subtitle::SubtitleKind;
