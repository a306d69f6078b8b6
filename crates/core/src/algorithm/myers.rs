use crate::algorithm::table::{earliest_match_script, Band};
use crate::algorithm::{common_prefix_len, DiffAlgorithm, Edit};
use crate::tokenizers::Token;

/// Myers O(ND) diff algorithm
///
/// A greedy forward search over diagonals finds the edit distance D with
/// O(N+M) memory. The cost table is then filled only on the D + 1 diagonals a
/// minimal path can use, so time is O((N+M)·D) and the script is identical to
/// [`LcsAlgorithm`]'s.
///
/// [`LcsAlgorithm`]: crate::algorithm::LcsAlgorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersAlgorithm;

impl MyersAlgorithm {
    pub fn new() -> Self {
        Self
    }
}

impl DiffAlgorithm for MyersAlgorithm {
    fn compute(&self, original: &[Token<'_>], modified: &[Token<'_>]) -> Vec<Edit> {
        let prefix = common_prefix_len(original, modified);
        let mut edits: Vec<Edit> = (0..prefix)
            .map(|i| Edit::Equal { old_index: i, new_index: i })
            .collect();

        let old = &original[prefix..];
        let new = &modified[prefix..];
        let distance = edit_distance(old, new);
        let band = Band::for_distance(old.len(), new.len(), distance);
        edits.extend(earliest_match_script(old, new, band, prefix));

        edits
    }

    fn name(&self) -> &str {
        "myers"
    }
}

/// Fewest deletes plus inserts turning `old` into `new`
///
/// `frontier[k + max]` is the furthest x reached on diagonal k so far.
pub fn edit_distance(old: &[Token<'_>], new: &[Token<'_>]) -> usize {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let max = n + m;
    if max == 0 {
        return 0;
    }

    let mut frontier = vec![0isize; (2 * max + 2) as usize];
    let at = |k: isize| (k + max) as usize;

    for d in 0..=max {
        for k in (-d..=d).step_by(2) {
            let mut x = if k == -d || (k != d && frontier[at(k - 1)] < frontier[at(k + 1)]) {
                frontier[at(k + 1)]
            } else {
                frontier[at(k - 1)] + 1
            };
            let mut y = x - k;

            while x < n && y < m && old[x as usize].text == new[y as usize].text {
                x += 1;
                y += 1;
            }

            frontier[at(k)] = x;

            if x >= n && y >= m {
                return d as usize;
            }
        }
    }

    max as usize
}
