//! Filesystem traversal
//!
//! This module provides the depth-bounded, lazy walk over the directory
//! tree. The walk is depth-first pre-order in filesystem-native enumeration
//! order (unsorted). Errors encountered while listing (permission denied,
//! entries vanishing mid-walk) cause the offending subtree to be skipped;
//! they never abort the walk.

use std::path::Path;

use log::debug;
use walkdir::{DirEntry, WalkDir};

/// Lazy iterator over the entries below a root directory.
///
/// The root itself is never yielded; its immediate children are depth 1.
/// A `max_depth` of 0 yields nothing since the root is never opened.
/// Symlinked directories are followed; walkdir's ancestor-loop detection
/// turns symlink cycles into walk errors, which are skipped like any other.
pub struct Walker {
    inner: walkdir::IntoIter,
}

impl Walker {
    /// Create a new Walker rooted at the given path.
    ///
    /// `max_depth` gates listing, not just emission: a directory sitting at
    /// the boundary is yielded but never opened.
    pub fn new<P: AsRef<Path>>(root: P, max_depth: usize) -> Self {
        let walker = WalkDir::new(root.as_ref())
            .follow_links(true)
            .max_depth(max_depth);

        Self {
            inner: walker.into_iter(),
        }
    }
}

impl Iterator for Walker {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    // The root (depth 0) is never a candidate
                    if entry.depth() == 0 {
                        continue;
                    }
                    return Some(entry);
                }
                Err(err) => {
                    debug!("skipping unreadable entry: {}", err);
                    continue;
                }
            }
        }
    }
}
