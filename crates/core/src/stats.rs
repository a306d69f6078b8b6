//! Aggregate counts over a diff result

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diff::{DiffResult, SegmentKind};

/// Unit counts shown in the summary panel
///
/// `changed` is `min(added, removed)`: a display heuristic for "units that
/// were probably replaced", not the output of a separate replace detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Units present only in the new text
    pub added: usize,
    /// Units present only in the old text
    pub removed: usize,
    pub changed: usize,
}

impl Stats {
    pub fn new(added: usize, removed: usize) -> Self {
        Self {
            added,
            removed,
            changed: added.min(removed),
        }
    }

    /// Derive stats by summing unit counts per segment kind
    pub fn from_result(result: &DiffResult) -> Self {
        let (added, removed) = result
            .segments
            .iter()
            .fold((0, 0), |(added, removed), segment| match segment.kind {
                SegmentKind::Added => (added + segment.unit_count, removed),
                SegmentKind::Removed => (added, removed + segment.unit_count),
                SegmentKind::Unchanged => (added, removed),
            });
        Self::new(added, removed)
    }

    /// Total number of units added or removed
    pub fn total(&self) -> usize {
        self.added + self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl From<&DiffResult> for Stats {
    fn from(result: &DiffResult) -> Self {
        Self::from_result(result)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} changed",
            self.added, self.removed, self.changed
        )
    }
}
