//! # TextCompare Core
//!
//! Compares two texts character-, word- or line-wise and turns the alignment
//! into highlighted segments, summary counts and exportable documents.
//!
//! ## Core Concepts
//!
//! - **Tokenizers**: Split text into comparison units without losing a byte
//! - **Algorithms**: Align two token sequences into a minimal edit script
//! - **DiffResult**: Ordered `Unchanged` / `Added` / `Removed` segments
//! - **Stats & Export**: Unit counts, annotated plain text and standalone HTML
//!
//! ## Example
//!
//! ```rust
//! use textcompare_core::{compute_diff, compute_stats, export_plain_text, DiffMode};
//!
//! let result = compute_diff("hello world", "hello there", DiffMode::Word);
//! let stats = compute_stats(&result);
//!
//! assert_eq!(stats.added, 1);
//! assert_eq!(export_plain_text(&result), " hello -world+there");
//! ```

pub mod algorithm;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod export;
pub mod stats;
pub mod tokenizers;

// Re-export main types
pub use config::{DiffAlgorithm, DiffConfig, DiffMode};
pub use diff::{line_count, DiffResult, Segment, SegmentKind};
pub use engine::DiffEngine;
pub use error::{Error, Result};
pub use export::{export_html, export_plain_text, ExportFormat};
pub use stats::Stats;

/// Main entry point for computing diffs between two strings
///
/// Uses the default algorithm. Total over all inputs: empty and identical
/// strings simply produce empty or all-unchanged results.
///
/// # Example
///
/// ```rust
/// use textcompare_core::{compute_diff, DiffMode, Segment};
///
/// let result = compute_diff("", "xyz", DiffMode::Char);
/// assert_eq!(result.segments, vec![Segment::added("xyz", 3)]);
/// ```
pub fn compute_diff(original: &str, modified: &str, mode: DiffMode) -> DiffResult {
    DiffEngine::with_mode(mode).diff(original, modified)
}

/// Derive added / removed / changed unit counts from a result
pub fn compute_stats(result: &DiffResult) -> Stats {
    Stats::from_result(result)
}
