//! # Title Segmenter
//!
//! Splits a release title into bracket groups and the plain words between
//! them. Bracket contents are kept whole ("WebRip 1080p HEVC-10bit AAC",
//! "简繁内封字幕"); plain runs are split on word delimiters.

/// A piece of a release title, borrowed verbatim from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Original text, without the enclosing brackets.
    pub text: &'a str,
    /// Whether the text was enclosed in a bracket pair.
    pub bracketed: bool,
    /// Position of the segment in the title.
    pub order: usize,
}

/// Recognized bracket pairs. Groups are flat: an opener pairs with the first
/// following closer of the same style.
const BRACKETS: &[(char, char)] = &[
    ('[', ']'),
    ('［', '］'),
    ('【', '】'),
    ('(', ')'),
    ('（', '）'),
    ('《', '》'),
    ('〚', '〛'),
    ('〖', '〗'),
    ('{', '}'),
    ('「', '」'),
    ('『', '』'),
];

/// Delimiters splitting plain text into words, in addition to whitespace.
const WORD_DELIMITERS: &[char] = &['/', '\\', '|'];

fn closing_bracket(open: char) -> Option<char> {
    BRACKETS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, close)| *close)
}

fn is_word_delimiter(c: char) -> bool {
    c.is_whitespace() || WORD_DELIMITERS.contains(&c)
}

/// Splits `input` into segments in source order.
///
/// Never fails: an opener without a closer, or an empty pair, is kept as
/// ordinary text.
///
/// # Examples
/// ```
/// use jimaku_core::parser::segmenter::segment;
///
/// let segments = segment("[Group] Title - 01 [1080p][简繁内封]");
/// let texts: Vec<_> = segments.iter().map(|s| s.text).collect();
/// assert_eq!(texts, ["Group", "Title", "-", "01", "1080p", "简繁内封"]);
/// ```
#[must_use]
pub fn segment(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(c) = input[cursor..].chars().next() {
        let open_len = c.len_utf8();
        if let Some(close) = closing_bracket(c) {
            let body_start = cursor + open_len;
            if let Some(len) = input[body_start..].find(close).filter(|len| *len > 0) {
                push_words(&mut segments, &input[plain_start..cursor]);
                push(&mut segments, &input[body_start..body_start + len], true);
                cursor = body_start + len + close.len_utf8();
                plain_start = cursor;
                continue;
            }
        }
        cursor += open_len;
    }
    push_words(&mut segments, &input[plain_start..]);

    segments
}

fn push<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str, bracketed: bool) {
    let order = segments.len();
    segments.push(Segment {
        text,
        bracketed,
        order,
    });
}

fn push_words<'a>(segments: &mut Vec<Segment<'a>>, run: &'a str) {
    for word in run.split(is_word_delimiter).filter(|w| !w.is_empty()) {
        push(segments, word, false);
    }
}
