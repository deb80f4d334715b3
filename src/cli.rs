//! Command-line interface for peekr
//!
//! This module turns the raw argument list into a validated
//! [`SearchConfig`]. The grammar is deliberately find-like: single-dash
//! long options (`-name`, `-atime`, `-type`), a bare token as the search
//! root, and a flag at the end of the line with no value is silently
//! ignored (the default is retained).

use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::finder::config::{EntryType, SearchConfig};

/// Short usage summary printed alongside configuration errors.
pub const USAGE: &str = "Usage: peekr -n <pattern> [-atime <days>] [-t f|d] [-m <depth>] [search_dir]";

/// Parse the argument list (program name excluded) into a `SearchConfig`.
///
/// Tokens are processed left to right. Any token not starting with `-` sets
/// the search root; the last one wins. Performs no filesystem access.
pub fn parse_args(args: &[String]) -> Result<SearchConfig, ConfigError> {
    let mut name_pattern: Option<String> = None;
    let mut access_within_days: Option<i64> = None;
    let mut entry_type = EntryType::default();
    let mut max_depth: usize = 1;
    let mut root_dir = PathBuf::from(".");

    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        if token.starts_with('-') {
            match token.as_str() {
                "-n" | "-name" => {
                    if let Some(value) = tokens.next() {
                        name_pattern = Some(value.clone());
                    }
                }
                "-atime" => {
                    if let Some(value) = tokens.next() {
                        let days = value
                            .parse::<i64>()
                            .map_err(|_| ConfigError::InvalidTimeValue(value.clone()))?;
                        access_within_days = Some(days);
                    }
                }
                "-t" | "-type" => {
                    if let Some(value) = tokens.next() {
                        entry_type = EntryType::parse(value)?;
                    }
                }
                "-m" | "--max-depth" => {
                    if let Some(value) = tokens.next() {
                        max_depth = value
                            .parse::<usize>()
                            .map_err(|_| ConfigError::InvalidDepthValue(value.clone()))?;
                    }
                }
                _ => return Err(ConfigError::UnknownOption(token.clone())),
            }
        } else {
            root_dir = PathBuf::from(token);
        }
    }

    let name_pattern = name_pattern.ok_or(ConfigError::MissingNamePattern)?;

    // Reject syntactically invalid globs up front rather than at search time
    glob::Pattern::new(&name_pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: name_pattern.clone(),
        source,
    })?;

    Ok(SearchConfig::new(name_pattern)
        .with_access_within_days(access_within_days)
        .with_entry_type(entry_type)
        .with_max_depth(max_depth)
        .with_root_dir(root_dir))
}
