//! # Jimaku
//!
//! Classifies anime fansub release titles into episode range, subtitle
//! languages, resolution and subtitle delivery kind.
//!
//! ```rust
//! let parsed = jimaku::parse("[DBD製作組][未來日記][01-26TV全集+OVA][1080P][繁體內嵌]");
//!
//! assert_eq!(parsed.render().episode_range, "01..26");
//! assert_eq!(parsed.resolution, Some(jimaku::Resolution::FHD1080));
//! assert_eq!(parsed.subtitle_kind, Some(jimaku::SubtitleKind::Embedded));
//! ```

pub use jimaku_core::*;
