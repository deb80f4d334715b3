//! Error types for peekr.
//!
//! Only configuration problems are fatal. Filesystem errors hit during the
//! walk (permission denied, vanished entries) are recovered locally by the
//! traversal and never reach the user.

use thiserror::Error;

/// Fatal errors raised while building a [`SearchConfig`](crate::SearchConfig)
/// from command-line tokens.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `-n`/`-name` pattern was given.
    #[error("name pattern required: provide one with -n or -name")]
    MissingNamePattern,

    /// A token started with `-` but is not a recognized option.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// The `-atime` value did not parse as an integer.
    #[error("invalid time value: {0}")]
    InvalidTimeValue(String),

    /// The `-t`/`-type` value was neither `f` nor `d`.
    #[error("invalid file type: {0} (try again with 'f' or 'd')")]
    InvalidFileType(String),

    /// The `-m`/`--max-depth` value did not parse as a non-negative integer.
    #[error("invalid depth value: {0}")]
    InvalidDepthValue(String),

    /// The name pattern is not a valid glob.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}
