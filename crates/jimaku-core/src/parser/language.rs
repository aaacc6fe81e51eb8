//! # Subtitle-Language Extractor
//!
//! Keyword table lookup over every segment. Chinese keywords are plain
//! substrings; ASCII codes are tokens that must stand apart from other ASCII
//! letters and digits, so `1.5GB` does not read as simplified Chinese.

use crate::parser::segmenter::Segment;
use crate::types::{SubtitleLanguage, SubtitleLanguageSet};

use Keyword::Text;
use SubtitleLanguage::{ChineseSimplified, ChineseTraditional, English, Japanese};

/// How a keyword is located in segment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    /// Case-sensitive substring.
    Text(&'static str),
    /// ASCII token bounded by non-alphanumeric characters.
    Token {
        text: &'static str,
        ignore_case: bool,
    },
}

impl Keyword {
    const fn token(text: &'static str) -> Self {
        Self::Token {
            text,
            ignore_case: false,
        }
    }

    const fn token_ci(text: &'static str) -> Self {
        Self::Token {
            text,
            ignore_case: true,
        }
    }

    fn is_in(self, haystack: &str) -> bool {
        match self {
            Self::Text(text) => haystack.contains(text),
            Self::Token { text, ignore_case } => {
                if ignore_case {
                    contains_token(&haystack.to_ascii_lowercase(), &text.to_ascii_lowercase())
                } else {
                    contains_token(haystack, text)
                }
            }
        }
    }
}

fn contains_token(haystack: &str, token: &str) -> bool {
    haystack.match_indices(token).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + token.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

const KEYWORDS: &[(Keyword, SubtitleLanguage)] = &[
    (Text("简"), ChineseSimplified),
    (Text("簡"), ChineseSimplified),
    (Keyword::token("GB"), ChineseSimplified),
    (Keyword::token_ci("CHS"), ChineseSimplified),
    (Text("繁"), ChineseTraditional),
    (Keyword::token_ci("BIG5"), ChineseTraditional),
    (Keyword::token_ci("CHT"), ChineseTraditional),
    (Text("英"), English),
    (Keyword::token_ci("ENG"), English),
    (Keyword::token_ci("English"), English),
    (Text("日语"), Japanese),
    (Text("日語"), Japanese),
    (Text("日文"), Japanese),
    (Text("简日"), Japanese),
    (Text("繁日"), Japanese),
    (Text("日双"), Japanese),
    (Text("日雙"), Japanese),
    (Keyword::token_ci("JPN"), Japanese),
];

/// Bahamut-sourced web releases are traditional Chinese.
const BAHA: &str = "Baha";

/// Collects the languages named anywhere in the title.
///
/// Japanese is only reported when a keyword names it; callers that treat
/// Japanese audio as implied add it themselves.
#[must_use]
pub fn extract_languages(segments: &[Segment<'_>]) -> SubtitleLanguageSet {
    let mut languages: SubtitleLanguageSet = segments
        .iter()
        .flat_map(|segment| {
            KEYWORDS
                .iter()
                .filter(|(keyword, _)| keyword.is_in(segment.text))
                .map(|(_, language)| *language)
        })
        .collect();

    if languages.is_empty()
        && segments
            .iter()
            .any(|s| s.text.split_whitespace().any(|word| word == BAHA))
    {
        languages.insert(ChineseTraditional);
    }
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::segmenter::segment;

    fn codes(input: &str) -> String {
        extract_languages(&segment(input)).to_string()
    }

    #[test]
    fn chinese_variants() {
        assert_eq!(codes("[Title][简繁内封字幕]"), "CHS, CHT");
        assert_eq!(codes("[Title][繁體內嵌]"), "CHT");
        assert_eq!(codes("[Title][BIG5_GB繁簡]"), "CHS, CHT");
        assert_eq!(codes("【Dymy字幕組】【1-26】【BIG5】"), "CHT");
        assert_eq!(codes("【华盟字幕社】[Sakura_Trick][01-12_Fin][GB]"), "CHS");
        assert_eq!(codes("[Title][CHS]"), "CHS");
        assert_eq!(codes("[Title][cht]"), "CHT");
    }

    #[test]
    fn english_keywords() {
        assert_eq!(codes("[Title][内封英文]"), "ENG");
        assert_eq!(codes("[Title][中英双语]"), "ENG");
        assert_eq!(codes("[Title][ENG]"), "ENG");
        assert_eq!(codes("[Title][English Sub]"), "ENG");
        assert_eq!(codes("[Title][简英双语]"), "CHS, ENG");
    }

    #[test]
    fn japanese_keywords() {
        assert_eq!(codes("[Title][简日双语]"), "CHS, JPN");
        assert_eq!(codes("[Title][繁日雙語]"), "CHT, JPN");
        assert_eq!(codes("[Title][日版/JPN.Ver]"), "JPN");
    }

    #[test]
    fn tokens_need_boundaries() {
        assert_eq!(codes("[Title][1.5GB]"), "");
        assert_eq!(codes("[Title][GBK]"), "");
        assert_eq!(codes("[Title][gb]"), "");
        assert_eq!(codes("[Title][ENGLAND]"), "");
        assert_eq!(codes("[Title][GB_MP4]"), "CHS");
    }

    #[test]
    fn baha_implies_traditional() {
        assert_eq!(codes("[ANi] Title - 03 [1080P][Baha][WEB-DL][AAC AVC][MP4]"), "CHT");
        assert_eq!(codes("[ANi] Title - 03 [1080P][Baha][WEB-DL][CHT][MP4]"), "CHT");
        assert_eq!(codes("[Group] Title [Baha][简日]"), "CHS, JPN");
        assert_eq!(codes("[Group] Bahamut [1080p]"), "");
    }

    #[test]
    fn nothing_detected() {
        assert!(extract_languages(&segment("[Moozzi2] 未來日記 Mirai Nikki (BD 1920x1080 x264 FLACx2)")).is_empty());
        assert!(extract_languages(&segment("")).is_empty());
    }
}
