//! Diff algorithms implementation
//!
//! Provides the sequence alignment algorithms that turn two token sequences
//! into a minimal edit script. Tokens compare equal when their texts are equal.
//! Both produce the same script: among all minimal ones, the one that keeps
//! unchanged tokens as early as possible.
pub mod lcs;
pub mod myers;
mod table;

use crate::tokenizers::Token;

pub use lcs::LcsAlgorithm;
pub use myers::MyersAlgorithm;

/// One step of an edit script, addressed by token index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `old[old_index]` is kept as `new[new_index]`
    Equal { old_index: usize, new_index: usize },
    /// `old[old_index]` is removed
    Delete { old_index: usize },
    /// `new[new_index]` is added
    Insert { new_index: usize },
}

/// Trait for diff algorithms
///
/// Implementations must return a minimal script (fewest deletes plus inserts)
/// that visits every old index and every new index exactly once, in order.
pub trait DiffAlgorithm {
    /// Compute the edit script between two token sequences
    fn compute(&self, original: &[Token<'_>], modified: &[Token<'_>]) -> Vec<Edit>;

    /// Get the name of this algorithm
    fn name(&self) -> &str;
}

// ============================================================================
// Helper Functions
// ============================================================================

fn common_prefix_len(original: &[Token<'_>], modified: &[Token<'_>]) -> usize {
    original
        .iter()
        .zip(modified)
        .take_while(|(a, b)| a.text == b.text)
        .count()
}

/// Count (equal, deleted, inserted) steps in a script
pub fn script_counts(edits: &[Edit]) -> (usize, usize, usize) {
    edits.iter().fold((0, 0, 0), |(eq, del, ins), edit| match edit {
        Edit::Equal { .. } => (eq + 1, del, ins),
        Edit::Delete { .. } => (eq, del + 1, ins),
        Edit::Insert { .. } => (eq, del, ins + 1),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tokenizers::{CharacterTokenizer, Tokenizer, WordTokenizer};

    pub fn chars(text: &str) -> Vec<Token<'_>> {
        CharacterTokenizer::new().tokenize(text)
    }

    pub fn words(text: &str) -> Vec<Token<'_>> {
        WordTokenizer.tokenize(text)
    }

    /// Checks that a script walks both sequences completely and in order
    pub fn assert_well_formed(edits: &[Edit], old_len: usize, new_len: usize) {
        let mut next_old = 0;
        let mut next_new = 0;
        for edit in edits {
            match *edit {
                Edit::Equal { old_index, new_index } => {
                    assert_eq!(old_index, next_old);
                    assert_eq!(new_index, next_new);
                    next_old += 1;
                    next_new += 1;
                }
                Edit::Delete { old_index } => {
                    assert_eq!(old_index, next_old);
                    next_old += 1;
                }
                Edit::Insert { new_index } => {
                    assert_eq!(new_index, next_new);
                    next_new += 1;
                }
            }
        }
        assert_eq!(next_old, old_len);
        assert_eq!(next_new, new_len);
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len(&chars("abcd"), &chars("abxd")), 2);
        assert_eq!(common_prefix_len(&chars(""), &chars("abc")), 0);
        assert_eq!(common_prefix_len(&chars("abc"), &chars("abc")), 3);
    }

    #[test]
    fn test_script_counts() {
        let edits = [
            Edit::Equal { old_index: 0, new_index: 0 },
            Edit::Delete { old_index: 1 },
            Edit::Insert { new_index: 1 },
            Edit::Insert { new_index: 2 },
        ];
        assert_eq!(script_counts(&edits), (1, 1, 2));
    }

    #[test]
    fn test_algorithms_agree_on_script() {
        let pairs = [
            ("kitten", "sitting"),
            ("abcabba", "cbabac"),
            ("", "xyz"),
            ("same", "same"),
            ("ab", "ba"),
            ("baa", "ca"),
            ("aaa", "bbbac"),
        ];
        for (a, b) in pairs {
            let (old, new) = (chars(a), chars(b));
            let lcs = LcsAlgorithm.compute(&old, &new);
            let myers = MyersAlgorithm.compute(&old, &new);
            assert_well_formed(&lcs, old.len(), new.len());
            assert_well_formed(&myers, old.len(), new.len());
            assert_eq!(lcs, myers, "{a:?} -> {b:?}");
        }
    }
}
