use thiserror::Error;

/// Errors raised while loading regression corpora.
///
/// Title classification itself is infallible.
#[derive(Debug, Error)]
pub enum JimakuError {
    /// The corpus file could not be read.
    #[error("failed to read corpus: {0}")]
    Io(#[from] std::io::Error),

    /// A corpus line is not a valid case record.
    #[error("invalid corpus record on line {line}: {source}")]
    Json {
        /// 1-based line number in the corpus.
        line: usize,
        source: serde_json::Error,
    },

    /// The corpus holds no cases.
    #[error("corpus contains no cases")]
    EmptyCorpus,
}

/// Result type alias for Jimaku operations.
pub type Result<T> = std::result::Result<T, JimakuError>;
