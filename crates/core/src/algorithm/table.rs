//! Suffix edit costs and the earliest-match walk shared by both aligners
//!
//! `cost(i, j)` is the number of deletes plus inserts needed to turn
//! `old[i..]` into `new[j..]`. The walk reads it front to back and keeps the
//! earliest old token that still fits a minimal script, pairing it with the
//! earliest new token that allows this. The script is therefore a function of
//! the inputs alone, whichever algorithm filled the table.
//!
//! Cells are only stored for the diagonals `k = i - j` in a [`Band`]. When the
//! band is too large to hold at once, rows are kept at checkpoints and the
//! rows in between are recomputed block by block as the walk reaches them.

use crate::algorithm::Edit;
use crate::tokenizers::Token;

const UNREACHABLE: u32 = u32::MAX;

/// Cells kept in memory before the table switches to checkpointing
const RESIDENT_CELLS: usize = 1 << 22;

/// Range of diagonals `k = i - j` a minimal path may visit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub lo: isize,
    pub hi: isize,
}

impl Band {
    /// Every cell of an `n` by `m` grid
    pub fn full(n: usize, m: usize) -> Self {
        Self {
            lo: -(m as isize),
            hi: n as isize,
        }
    }

    /// Diagonals reachable by a script with exactly `distance` edits
    ///
    /// A cell on a minimal path has `|k| + |k - (n - m)| <= distance`, which
    /// bounds `k` to `-(inserts)..=deletes`.
    pub fn for_distance(n: usize, m: usize, distance: usize) -> Self {
        let common = (n + m - distance) / 2;
        Self {
            lo: -((m - common) as isize),
            hi: (n - common) as isize,
        }
    }

    /// Inclusive column range of row `i`
    fn columns(&self, i: usize, m: usize) -> (usize, usize) {
        let i = i as isize;
        let start = (i - self.hi).max(0) as usize;
        let end = (i - self.lo).min(m as isize) as usize;
        (start, end)
    }

    fn width(&self, m: usize) -> usize {
        ((self.hi - self.lo + 1) as usize).min(m + 1)
    }
}

#[derive(Debug, Clone, Default)]
struct Row {
    start: usize,
    costs: Vec<u32>,
}

impl Row {
    fn get(&self, j: usize) -> u32 {
        j.checked_sub(self.start)
            .and_then(|index| self.costs.get(index))
            .copied()
            .unwrap_or(UNREACHABLE)
    }

    fn end(&self) -> usize {
        self.start + self.costs.len()
    }
}

struct SuffixCosts<'t, 'a> {
    old: &'t [Token<'a>],
    new: &'t [Token<'a>],
    band: Band,
    /// Rows per block; block `b` spans rows `b * block..=min((b + 1) * block, n)`
    block: usize,
    /// Last row of every block
    checkpoints: Vec<Row>,
    loaded: usize,
    rows: Vec<Row>,
}

impl<'t, 'a> SuffixCosts<'t, 'a> {
    fn new(old: &'t [Token<'a>], new: &'t [Token<'a>], band: Band) -> Self {
        let n = old.len();
        let rows = n + 1;
        let block = if rows.saturating_mul(band.width(new.len())) <= RESIDENT_CELLS {
            rows
        } else {
            let mut side = 1;
            while side * side < rows {
                side += 1;
            }
            side
        };

        let mut costs = Self {
            old,
            new,
            band,
            block,
            checkpoints: vec![Row::default(); n.div_ceil(block)],
            loaded: 0,
            rows: Vec::new(),
        };
        costs.fill();
        costs
    }

    /// Compute every row once, keeping the checkpoints and the first block
    fn fill(&mut self) {
        let n = self.old.len();
        let first_end = self.block.min(n);
        let mut first = Vec::with_capacity(first_end + 1);
        let mut below: Option<Row> = None;

        for i in (0..=n).rev() {
            let row = self.compute_row(i, below.as_ref());
            if i > 0 && (i == n || i % self.block == 0) {
                self.checkpoints[(i - 1) / self.block] = row.clone();
            }
            if i <= first_end {
                first.push(row.clone());
            }
            below = Some(row);
        }

        first.reverse();
        self.rows = first;
        self.loaded = 0;
    }

    fn load_block(&mut self, block: usize) {
        if self.loaded == block {
            return;
        }

        let start = block * self.block;
        let end = ((block + 1) * self.block).min(self.old.len());
        let mut rows = Vec::with_capacity(end - start + 1);
        rows.push(self.checkpoints[block].clone());
        for i in (start..end).rev() {
            let row = self.compute_row(i, rows.last());
            rows.push(row);
        }

        rows.reverse();
        self.rows = rows;
        self.loaded = block;
    }

    fn compute_row(&self, i: usize, below: Option<&Row>) -> Row {
        let n = self.old.len();
        let m = self.new.len();
        let (start, end) = self.band.columns(i, m);
        let mut costs = vec![UNREACHABLE; end - start + 1];

        for j in (start..=end).rev() {
            let cost = if i == n && j == m {
                0
            } else if i < n && j < m && self.old[i].text == self.new[j].text {
                below.map_or(UNREACHABLE, |row| row.get(j + 1))
            } else {
                let delete = below.map_or(UNREACHABLE, |row| row.get(j));
                let insert = if j < end {
                    costs[j + 1 - start]
                } else {
                    UNREACHABLE
                };
                delete.min(insert).saturating_add(1)
            };
            costs[j - start] = cost;
        }

        Row { start, costs }
    }

    /// Column of the earliest new token `old[i]` can be kept as, starting
    /// from cell `(i, j)` on a minimal path
    fn earliest_match(&mut self, i: usize, j: usize) -> Option<usize> {
        self.load_block(i / self.block);
        let offset = self.loaded * self.block;
        let here = &self.rows[i - offset];
        let below = &self.rows[i + 1 - offset];
        let target = here.get(j);

        (j..here.end().min(self.new.len()))
            .take_while(|&column| column - j <= target as usize)
            .find(|&column| {
                self.old[i].text == self.new[column].text
                    && below.get(column + 1).saturating_add((column - j) as u32) == target
            })
    }
}

/// Minimal edit script that keeps unchanged tokens as early as possible
///
/// Only cells within `band` are considered, so `band` must contain every
/// minimal path. Indices in the script are shifted by `offset`.
pub(crate) fn earliest_match_script(
    old: &[Token<'_>],
    new: &[Token<'_>],
    band: Band,
    offset: usize,
) -> Vec<Edit> {
    let n = old.len();
    let m = new.len();
    let mut edits = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);

    if n > 0 && m > 0 {
        let mut costs = SuffixCosts::new(old, new, band);
        while i < n && j < m {
            match costs.earliest_match(i, j) {
                Some(column) => {
                    edits.extend((j..column).map(|j| Edit::Insert { new_index: offset + j }));
                    edits.push(Edit::Equal {
                        old_index: offset + i,
                        new_index: offset + column,
                    });
                    j = column + 1;
                }
                None => edits.push(Edit::Delete { old_index: offset + i }),
            }
            i += 1;
        }
    }

    edits.extend((i..n).map(|i| Edit::Delete { old_index: offset + i }));
    edits.extend((j..m).map(|j| Edit::Insert { new_index: offset + j }));

    edits
}
