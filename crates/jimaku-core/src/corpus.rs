//! # Regression Corpus
//!
//! Titles paired with their expected rendering, stored as JSON lines:
//!
//! ```text
//! # comment
//! {"title":"[Group][Title][01][720P]","episode_range":"01..01","subtitle_languages":"JPN","resolution":"720P","subtitle_kind":"null"}
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{JimakuError, Result};
use crate::parser::parse;
use crate::types::RenderedTitle;

/// One title and the rendering it must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusCase {
    pub title: String,
    #[serde(flatten)]
    pub expected: RenderedTitle,
}

/// A field whose rendering differs from the expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub title: String,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} expected {:?}, got {:?}",
            self.title, self.field, self.expected, self.actual
        )
    }
}

/// Outcome of checking a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusReport {
    /// Number of cases checked.
    pub total: usize,
    /// Number of cases with at least one mismatching field.
    pub failed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CorpusReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.total - self.failed
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Reads cases from JSON lines, skipping blank lines and `#` comments.
///
/// # Errors
/// Returns [`JimakuError::Io`] on read failure, [`JimakuError::Json`] with
/// the 1-based line number for a malformed record, and
/// [`JimakuError::EmptyCorpus`] when no case was found.
pub fn load_cases<R: BufRead>(reader: R) -> Result<Vec<CorpusCase>> {
    let mut cases = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }
        let case = serde_json::from_str(record).map_err(|source| JimakuError::Json {
            line: index + 1,
            source,
        })?;
        cases.push(case);
    }

    if cases.is_empty() {
        return Err(JimakuError::EmptyCorpus);
    }
    debug!(cases = cases.len(), "loaded corpus");
    Ok(cases)
}

/// Opens and reads a corpus file.
///
/// # Errors
/// See [`load_cases`].
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<CorpusCase>> {
    let file = File::open(path.as_ref())?;
    load_cases(BufReader::new(file))
}

/// Parses every case and compares all four rendered fields.
#[must_use]
pub fn check(cases: &[CorpusCase]) -> CorpusReport {
    let mut report = CorpusReport {
        total: cases.len(),
        ..CorpusReport::default()
    };

    for case in cases {
        let actual = parse(&case.title).render();
        let before = report.mismatches.len();
        for (field, expected, got) in case.expected.fields(&actual) {
            if expected != got {
                debug!(title = %case.title, field, expected, actual = got, "corpus mismatch");
                report.mismatches.push(Mismatch {
                    title: case.title.clone(),
                    field,
                    expected: expected.to_string(),
                    actual: got.to_string(),
                });
            }
        }
        if report.mismatches.len() > before {
            report.failed += 1;
        }
    }

    info!(
        total = report.total,
        passed = report.passed(),
        mismatches = report.mismatches.len(),
        "corpus checked"
    );
    report
}
