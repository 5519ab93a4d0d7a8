//! Path-flattened view of a patch.

use super::Path;
use std::collections::BTreeSet;
use std::fmt;

/// Summary lists the paths a patch touches, grouped by what happened there.
///
/// No path appears in more than one of the three sets. If all of them are
/// empty, the patch was `Equal`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Paths that only exist on the new side.
    pub added: BTreeSet<Path>,
    /// Paths that only exist on the old side.
    pub removed: BTreeSet<Path>,
    /// Paths whose value was replaced.
    pub modified: BTreeSet<Path>,
}

impl Summary {
    pub fn new() -> Self {
        Summary::default()
    }

    /// Returns true if there are no changes.
    pub fn is_same(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Total number of changed paths.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    pub fn has_added(&self) -> bool {
        !self.added.is_empty()
    }

    pub fn has_removed(&self) -> bool {
        !self.removed.is_empty()
    }

    pub fn has_modified(&self) -> bool {
        !self.modified.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("Modified", &self.modified),
            ("Added", &self.added),
            ("Removed", &self.removed),
        ];

        let mut first = true;
        for (title, paths) in sections {
            if paths.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "- {} Fields:", title)?;
            for path in paths {
                write!(f, "\n  {}", path)?;
            }
        }

        Ok(())
    }
}
