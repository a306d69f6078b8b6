use crate::algorithm::table::{earliest_match_script, Band};
use crate::algorithm::{common_prefix_len, DiffAlgorithm, Edit};
use crate::tokenizers::Token;

/// Longest-common-subsequence diff over the whole cost table
///
/// Every cell of the N×M grid left after the common prefix is filled, so time
/// is O(N·M). Rows are checkpointed once the table outgrows a fixed budget,
/// which keeps memory near O(√N·M). Unchanged tokens land as early as
/// possible and the script is identical to [`MyersAlgorithm`]'s.
///
/// [`MyersAlgorithm`]: crate::algorithm::MyersAlgorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct LcsAlgorithm;

impl LcsAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for LcsAlgorithm {
    fn compute(&self, original: &[Token<'_>], modified: &[Token<'_>]) -> Vec<Edit> {
        let prefix = common_prefix_len(original, modified);
        let mut edits: Vec<Edit> = (0..prefix)
            .map(|i| Edit::Equal { old_index: i, new_index: i })
            .collect();

        let old = &original[prefix..];
        let new = &modified[prefix..];
        let band = Band::full(old.len(), new.len());
        edits.extend(earliest_match_script(old, new, band, prefix));

        edits
    }

    fn name(&self) -> &str {
        "lcs"
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{assert_well_formed, chars, words};
    use super::*;

    #[test]
    fn test_lcs_basic() {
        let orig = words("hello world");
        let modified = words("hello there");

        let ops = LcsAlgorithm::new().compute(&orig, &modified);

        assert_eq!(
            ops,
            vec![
                Edit::Equal { old_index: 0, new_index: 0 },
                Edit::Equal { old_index: 1, new_index: 1 },
                Edit::Delete { old_index: 2 },
                Edit::Insert { new_index: 2 },
            ]
        );
    }

    #[test]
    fn test_all_deletions() {
        let orig = words("hello world");
        let ops = LcsAlgorithm::new().compute(&orig, &[]);

        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|op| matches!(op, Edit::Delete { .. })));
    }

    #[test]
    fn test_all_insertions() {
        let modified = words("hello world");
        let ops = LcsAlgorithm::new().compute(&[], &modified);

        assert_eq!(ops.len(), 3);
        assert!(ops.iter().all(|op| matches!(op, Edit::Insert { .. })));
    }

    #[test]
    fn test_earliest_match_wins() {
        // Keeping either `a` is minimal; the first one is kept.
        let ops = LcsAlgorithm::new().compute(&chars("aa"), &chars("a"));
        assert_eq!(
            ops,
            vec![
                Edit::Equal { old_index: 0, new_index: 0 },
                Edit::Delete { old_index: 1 },
            ]
        );
    }

    #[test]
    fn test_earliest_match_after_a_mismatch() {
        // "a" can stay as old index 1 or 2; the earlier one is kept
        let ops = LcsAlgorithm::new().compute(&chars("baa"), &chars("ca"));
        assert_eq!(
            ops,
            vec![
                Edit::Delete { old_index: 0 },
                Edit::Insert { new_index: 0 },
                Edit::Equal { old_index: 1, new_index: 1 },
                Edit::Delete { old_index: 2 },
            ]
        );
    }

    #[test]
    fn test_earliest_repeated_word_kept() {
        let ops = LcsAlgorithm::new().compute(&words("x y y"), &words("z y"));
        assert_eq!(
            ops,
            vec![
                Edit::Delete { old_index: 0 },
                Edit::Insert { new_index: 0 },
                Edit::Equal { old_index: 1, new_index: 1 },
                Edit::Equal { old_index: 2, new_index: 2 },
                Edit::Delete { old_index: 3 },
                Edit::Delete { old_index: 4 },
            ]
        );
    }

    #[test]
    fn test_swap_keeps_first_old_token() {
        let ops = LcsAlgorithm::new().compute(&chars("ab"), &chars("ba"));
        assert_eq!(
            ops,
            vec![
                Edit::Insert { new_index: 0 },
                Edit::Equal { old_index: 0, new_index: 1 },
                Edit::Delete { old_index: 1 },
            ]
        );
    }

    #[test]
    fn test_minimal_script() {
        let old = chars("kitten");
        let new = chars("sitting");
        let ops = LcsAlgorithm::new().compute(&old, &new);

        assert_well_formed(&ops, old.len(), new.len());
        let equal = ops.iter().filter(|op| matches!(op, Edit::Equal { .. })).count();
        // LCS of kitten/sitting is "ittn"
        assert_eq!(equal, 4);
    }
}
