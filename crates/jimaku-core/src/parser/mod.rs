pub mod episode;
pub mod language;
pub mod resolution;
pub mod segmenter;
pub mod subtitle_kind;
pub mod unified;

pub use episode::extract_episode_range;
pub use language::extract_languages;
pub use resolution::extract_resolution;
pub use segmenter::{Segment, segment};
pub use subtitle_kind::extract_subtitle_kind;
pub use unified::{TitleParser, parse};
