//! Search configuration
//!
//! This module provides the validated, read-only configuration that drives a
//! search. A `SearchConfig` is built once per invocation (normally by the
//! CLI parser) and never mutated during traversal.

use std::path::PathBuf;

use crate::errors::ConfigError;

/// Kind of entry a search is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Regular file
    File,
    /// Directory
    Directory,
}

impl EntryType {
    /// Parse a type code as given on the command line (`f` or `d`,
    /// case-insensitive).
    pub fn parse(code: &str) -> Result<Self, ConfigError> {
        match code.to_ascii_lowercase().as_str() {
            "f" => Ok(EntryType::File),
            "d" => Ok(EntryType::Directory),
            _ => Err(ConfigError::InvalidFileType(code.to_string())),
        }
    }
}

impl Default for EntryType {
    fn default() -> Self {
        EntryType::File
    }
}

/// Options for configuring a search.
///
/// `max_depth` bounds how deep the walk goes: the root's immediate children
/// are depth 1, and a directory at the depth boundary is never opened. With
/// `max_depth` of 0 nothing is listed at all.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Glob pattern matched against an entry's base name (case-sensitive)
    pub name_pattern: String,

    /// Only match entries last accessed within this many whole days.
    /// Negative values are accepted and match nothing.
    pub access_within_days: Option<i64>,

    /// Kind of entry to match
    pub entry_type: EntryType,

    /// Maximum traversal depth (root's children are depth 1)
    pub max_depth: usize,

    /// Directory to begin traversal in
    pub root_dir: PathBuf,
}

impl SearchConfig {
    /// Create a new config for the given name pattern with default values:
    /// files only, depth 1, rooted at the current directory, no access-time
    /// filter.
    pub fn new(name_pattern: impl Into<String>) -> Self {
        Self {
            name_pattern: name_pattern.into(),
            access_within_days: None,
            entry_type: EntryType::default(),
            max_depth: 1,
            root_dir: PathBuf::from("."),
        }
    }

    /// Set the access-time window in days
    pub fn with_access_within_days(mut self, days: Option<i64>) -> Self {
        self.access_within_days = days;
        self
    }

    /// Set the kind of entry to match
    pub fn with_entry_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = entry_type;
        self
    }

    /// Set the maximum traversal depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the directory to begin traversal in
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::new("*.txt");
        assert_eq!(config.name_pattern, "*.txt");
        assert_eq!(config.access_within_days, None);
        assert_eq!(config.entry_type, EntryType::File);
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.root_dir, PathBuf::from("."));
    }

    #[test]
    fn test_config_builders() {
        let config = SearchConfig::new("sub*")
            .with_access_within_days(Some(7))
            .with_entry_type(EntryType::Directory)
            .with_max_depth(3)
            .with_root_dir("/tmp");
        assert_eq!(config.access_within_days, Some(7));
        assert_eq!(config.entry_type, EntryType::Directory);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.root_dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_entry_type_parse() {
        assert_eq!(EntryType::parse("f").unwrap(), EntryType::File);
        assert_eq!(EntryType::parse("d").unwrap(), EntryType::Directory);
        assert_eq!(EntryType::parse("F").unwrap(), EntryType::File);
        assert_eq!(EntryType::parse("D").unwrap(), EntryType::Directory);
    }

    #[test]
    fn test_entry_type_parse_invalid() {
        assert!(matches!(
            EntryType::parse("x"),
            Err(ConfigError::InvalidFileType(code)) if code == "x"
        ));
        assert!(EntryType::parse("").is_err());
        assert!(EntryType::parse("fd").is_err());
    }
}
