use std::path::PathBuf;

use thiserror::Error;

/// Every way the engine can fail.
///
/// All variants are unrecoverable at the point of occurrence: they signal a
/// configuration, input, or storage problem the caller has to resolve. The
/// engine never retries and never falls back silently.
#[derive(Debug, Error)]
pub enum GambitError {
    /// The history file does not exist and creation on missing was disabled.
    #[error("decision history {path} is missing and create_on_missing is disabled")]
    MissingHistory { path: PathBuf },

    /// `decide` was called with an empty option list.
    #[error("decide needs at least one option")]
    EmptyOptions,

    /// Every weighted probability came out zero, so there is no
    /// distribution to normalize. Practically unreachable while the
    /// exploration bonus is in play.
    #[error("weighted probabilities sum to zero; cannot build a distribution")]
    ZeroWeightSum,

    /// Reading or writing the history file failed.
    #[error("storage failure at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The history file holds a document we cannot decode, or the in-memory
    /// state failed to encode.
    #[error("malformed decision history at {path}: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
