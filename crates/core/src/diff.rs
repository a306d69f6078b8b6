//! Diff result types and structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::Edit;
use crate::config::DiffMode;
use crate::tokenizers::Token;

/// Classification of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Present in both texts
    Unchanged,
    /// Present only in the new text
    Added,
    /// Present only in the old text
    Removed,
}

impl SegmentKind {
    /// Marker used by the plain-text export
    pub fn marker(&self) -> char {
        match self {
            SegmentKind::Unchanged => ' ',
            SegmentKind::Added => '+',
            SegmentKind::Removed => '-',
        }
    }

    /// Whether segments of this kind belong to the old text
    pub fn in_old(&self) -> bool {
        matches!(self, SegmentKind::Unchanged | SegmentKind::Removed)
    }

    /// Whether segments of this kind belong to the new text
    pub fn in_new(&self) -> bool {
        matches!(self, SegmentKind::Unchanged | SegmentKind::Added)
    }
}

/// A maximal run of comparison units sharing one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,

    /// Concatenated text of the merged units
    pub text: String,

    /// Number of units (characters, words or lines) merged into this segment
    pub unit_count: usize,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>, unit_count: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            unit_count,
        }
    }

    pub fn unchanged(text: impl Into<String>, unit_count: usize) -> Self {
        Self::new(SegmentKind::Unchanged, text, unit_count)
    }

    pub fn added(text: impl Into<String>, unit_count: usize) -> Self {
        Self::new(SegmentKind::Added, text, unit_count)
    }

    pub fn removed(text: impl Into<String>, unit_count: usize) -> Self {
        Self::new(SegmentKind::Removed, text, unit_count)
    }

    pub fn is_change(&self) -> bool {
        self.kind != SegmentKind::Unchanged
    }

    /// Get a human-readable description of this segment
    pub fn description(&self) -> String {
        match self.kind {
            SegmentKind::Unchanged => format!("Unchanged: {:?}", self.text),
            SegmentKind::Added => format!("Added: {:?}", self.text),
            SegmentKind::Removed => format!("Removed: {:?}", self.text),
        }
    }

    /// Rendered line count of this segment's text in a diff view
    fn display_lines(&self) -> usize {
        let pieces = self.text.split('\n').count();
        if self.text.ends_with('\n') {
            pieces - 1
        } else {
            pieces
        }
    }
}

/// Complete diff result: the ordered segments of one comparison
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffResult {
    /// Granularity the texts were compared at
    pub mode: DiffMode,

    /// Segments in alignment order
    pub segments: Vec<Segment>,
}

impl DiffResult {
    pub fn new(mode: DiffMode, segments: Vec<Segment>) -> Self {
        Self { mode, segments }
    }

    /// Coalesce an edit script into segments.
    ///
    /// Within each run of consecutive changes, removed units are emitted
    /// before added units so a replacement reads as one removal followed by
    /// one addition. Matched units always keep the old side's text.
    pub fn from_edits(
        mode: DiffMode,
        original: &[Token<'_>],
        modified: &[Token<'_>],
        edits: &[Edit],
    ) -> Self {
        let mut builder = SegmentBuilder::default();
        let mut removed: Vec<&str> = Vec::new();
        let mut added: Vec<&str> = Vec::new();

        for edit in edits {
            match *edit {
                Edit::Equal { old_index, .. } => {
                    builder.flush(&mut removed, &mut added);
                    builder.push(SegmentKind::Unchanged, original[old_index].text);
                }
                Edit::Delete { old_index } => removed.push(original[old_index].text),
                Edit::Insert { new_index } => added.push(modified[new_index].text),
            }
        }
        builder.flush(&mut removed, &mut added);

        Self::new(mode, builder.segments)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Check that no unit was added or removed
    pub fn is_identical(&self) -> bool {
        self.segments.iter().all(|s| !s.is_change())
    }

    /// Get only the changed segments (exclude Unchanged)
    pub fn changed_segments(&self) -> Vec<&Segment> {
        self.segments.iter().filter(|s| s.is_change()).collect()
    }

    /// Reassemble the old text from Unchanged and Removed segments
    pub fn old_text(&self) -> String {
        self.side_text(SegmentKind::in_old)
    }

    /// Reassemble the new text from Unchanged and Added segments
    pub fn new_text(&self) -> String {
        self.side_text(SegmentKind::in_new)
    }

    fn side_text(&self, keep: fn(&SegmentKind) -> bool) -> String {
        self.segments
            .iter()
            .filter(|s| keep(&s.kind))
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Number of gutter lines needed to render the inline diff (at least 1)
    pub fn line_count(&self) -> usize {
        self.segments
            .iter()
            .map(Segment::display_lines)
            .sum::<usize>()
            .max(1)
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Diff Result ({} mode) ===", self.mode)?;

        for (i, segment) in self.segments.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, segment.description())?;
        }

        Ok(())
    }
}

/// Number of lines an input pane shows for `text` (at least 1)
pub fn line_count(text: &str) -> usize {
    text.split('\n').count().max(1)
}

#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    fn push(&mut self, kind: SegmentKind, text: &str) {
        match self.segments.last_mut() {
            Some(last) if last.kind == kind => {
                last.text.push_str(text);
                last.unit_count += 1;
            }
            _ => self.segments.push(Segment::new(kind, text, 1)),
        }
    }

    fn flush(&mut self, removed: &mut Vec<&str>, added: &mut Vec<&str>) {
        for text in removed.drain(..) {
            self.push(SegmentKind::Removed, text);
        }
        for text in added.drain(..) {
            self.push(SegmentKind::Added, text);
        }
    }
}
