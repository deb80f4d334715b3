//! Directory search module
//!
//! Ties the pieces of a search together: a validated [`SearchConfig`]
//! drives a depth-bounded [`Walker`](walker::Walker), and every yielded
//! entry is run through the [`MatchPredicate`](filter::MatchPredicate).
//! Matching paths come out of a lazy iterator in encounter order.

pub mod config;
pub mod filter;
pub mod walker;

use std::path::PathBuf;
use std::time::SystemTime;

use log::debug;

pub use self::config::{EntryType, SearchConfig};
pub use self::filter::{FileFilter, MatchPredicate};

use self::walker::Walker;
use crate::errors::ConfigError;

/// Directory search driver.
///
/// A `Finder` holds the read-only config and the reference clock for
/// access-time checks. Each call to [`search`](Finder::search) re-walks the
/// filesystem from its current state; results can differ between calls as
/// the tree mutates underneath.
pub struct Finder {
    config: SearchConfig,
    now: SystemTime,
}

impl Finder {
    /// Create a new Finder measured against the current time
    pub fn new(config: SearchConfig) -> Self {
        Self::with_clock(config, SystemTime::now())
    }

    /// Create a new Finder with an explicit reference clock for
    /// access-time checks
    pub fn with_clock(config: SearchConfig, now: SystemTime) -> Self {
        Self { config, now }
    }

    /// Start a search, returning a lazy iterator of matching paths.
    ///
    /// Fails only if the configured name pattern is not a valid glob; all
    /// filesystem trouble during the walk is skipped locally.
    pub fn search(&self) -> Result<SearchIter, ConfigError> {
        let predicate = MatchPredicate::from_config_at(&self.config, self.now)?;

        debug!(
            "searching {} (max depth {}) where {}",
            self.config.root_dir.display(),
            self.config.max_depth,
            predicate.description()
        );

        Ok(SearchIter {
            walker: Walker::new(&self.config.root_dir, self.config.max_depth),
            predicate,
        })
    }
}

/// Lazy iterator over matching paths, interleaved with the walk itself.
pub struct SearchIter {
    walker: Walker,
    predicate: MatchPredicate,
}

impl Iterator for SearchIter {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.walker.next()?;
            if self.predicate.matches(&entry) {
                return Some(entry.into_path());
            }
        }
    }
}
