//! Library for searching a directory tree by name, type and access recency.
//!
//! This library backs the `peekr` command-line tool. It provides:
//! - A validated, read-only search configuration
//! - A depth-bounded, lazy directory walk
//! - A composable match predicate (base-name glob, entry type,
//!   last-access window)
//!
//! The walk is single-threaded and holds no state across invocations.
//! Filesystem errors encountered mid-walk (unreadable directories, entries
//! vanishing) are skipped locally and never abort a search.
//!
//! # Example
//!
//! ```no_run
//! use peekr::finder::{Finder, SearchConfig, EntryType};
//!
//! let config = SearchConfig::new("*.rs")
//!     .with_max_depth(3)
//!     .with_root_dir("src");
//!
//! let finder = Finder::new(config);
//! for path in finder.search().unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::ConfigError;
pub use finder::{EntryType, Finder, SearchConfig};
