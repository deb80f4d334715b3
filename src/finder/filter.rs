//! Entry filtering functionality
//!
//! This module provides the match predicate applied to every entry the
//! walker yields: a glob check on the base name, a file-vs-directory check,
//! and an optional last-access recency check. Filters are evaluated in that
//! order, cheapest first, and short-circuit on the first miss.

use std::time::SystemTime;

use glob::Pattern;
use log::debug;
use walkdir::DirEntry;

use super::config::{EntryType, SearchConfig};
use crate::errors::ConfigError;

const SECS_PER_DAY: u64 = 86_400;

/// Trait for entry filters
pub trait FileFilter {
    /// Check if the entry matches the filter
    fn matches(&self, entry: &DirEntry) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Filter for matching entry base names against a glob pattern
pub struct NameFilter {
    pattern: Pattern,
    original_pattern: String,
}

impl NameFilter {
    /// Create a new NameFilter with the given pattern
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let compiled = Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            original_pattern: pattern.to_string(),
        })
    }
}

impl FileFilter for NameFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        // Non-UTF-8 names cannot match a textual pattern
        match entry.file_name().to_str() {
            Some(name) => self.pattern.matches(name),
            None => false,
        }
    }

    fn description(&self) -> String {
        format!("name matches '{}'", self.original_pattern)
    }
}

/// Filter for matching the kind of entry (file or directory)
pub struct TypeFilter {
    entry_type: EntryType,
}

impl TypeFilter {
    /// Create a new TypeFilter for the given entry type
    pub fn new(entry_type: EntryType) -> Self {
        Self { entry_type }
    }
}

impl FileFilter for TypeFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        match self.entry_type {
            EntryType::File => entry.file_type().is_file(),
            EntryType::Directory => entry.file_type().is_dir(),
        }
    }

    fn description(&self) -> String {
        match self.entry_type {
            EntryType::File => "is a regular file".to_string(),
            EntryType::Directory => "is a directory".to_string(),
        }
    }
}

/// Filter for matching entries last accessed within a number of whole days.
///
/// The reference clock is injected at construction so the elapsed-days logic
/// can be tested without touching real time. Elapsed days are the floor of
/// the duration since last access; an access time in the future counts as
/// today. If the access time cannot be read (entry vanished, permission
/// denied) the filter fails soft and reports a non-match instead of
/// aborting the walk.
pub struct AccessTimeFilter {
    within_days: i64,
    now: SystemTime,
}

impl AccessTimeFilter {
    /// Create a new AccessTimeFilter measured against the current time
    pub fn new(within_days: i64) -> Self {
        Self::with_clock(within_days, SystemTime::now())
    }

    /// Create a new AccessTimeFilter measured against an explicit clock
    pub fn with_clock(within_days: i64, now: SystemTime) -> Self {
        Self { within_days, now }
    }
}

impl FileFilter for AccessTimeFilter {
    fn matches(&self, entry: &DirEntry) -> bool {
        let accessed = match entry.metadata().ok().and_then(|m| m.accessed().ok()) {
            Some(accessed) => accessed,
            None => {
                debug!(
                    "cannot read access time for {}, treating as non-match",
                    entry.path().display()
                );
                return false;
            }
        };

        let elapsed_days = match self.now.duration_since(accessed) {
            Ok(elapsed) => (elapsed.as_secs() / SECS_PER_DAY) as i64,
            // Accessed "in the future" relative to our clock
            Err(_) => 0,
        };

        elapsed_days <= self.within_days
    }

    fn description(&self) -> String {
        format!("accessed within {} days", self.within_days)
    }
}

/// The full match predicate for a search, composed from a config.
///
/// Filters are checked in order and short-circuit: name, then type, then
/// (if configured) access time.
pub struct MatchPredicate {
    filters: Vec<Box<dyn FileFilter>>,
}

impl MatchPredicate {
    /// Build the predicate for a config, measured against the current time
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        Self::from_config_at(config, SystemTime::now())
    }

    /// Build the predicate for a config with an explicit reference clock
    pub fn from_config_at(config: &SearchConfig, now: SystemTime) -> Result<Self, ConfigError> {
        let mut filters: Vec<Box<dyn FileFilter>> = vec![
            Box::new(NameFilter::new(&config.name_pattern)?),
            Box::new(TypeFilter::new(config.entry_type)),
        ];

        if let Some(days) = config.access_within_days {
            filters.push(Box::new(AccessTimeFilter::with_clock(days, now)));
        }

        Ok(Self { filters })
    }
}

impl FileFilter for MatchPredicate {
    fn matches(&self, entry: &DirEntry) -> bool {
        self.filters.iter().all(|filter| filter.matches(entry))
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.filters.iter().map(|f| f.description()).collect();
        parts.join(" and ")
    }
}
