//! Greedy block alignment between two normalized texts.
//!
//! The aligner repeatedly finds the longest common contiguous run inside a
//! pair of ranges, emits it, and then works on the ranges to its left and
//! to its right independently:
//!
//! 1. **Longest run** — scan `a` left to right, tracking for every position
//!    `j` in `b` the length of the common run ending at `(i, j)`. A run
//!    replaces the current best only when strictly longer, so ties go to
//!    the earliest start in `a`, then the earliest start in `b`.
//! 2. **Recurse** — the prefix ranges before the run and the suffix ranges
//!    after it are pushed onto a work stack.
//! 3. **Collect** — blocks are sorted by offset and adjacent blocks are
//!    merged.
//!
//! This is a heuristic, not an optimal LCS: scores and fragments are
//! defined relative to its output, so the search order above must not
//! change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedText;

/// `b` must be at least this long before the popularity filter applies.
const AUTOJUNK_MIN_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A run of identical bytes: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchBlock {
    /// Offset of the run in the first text.
    pub a: usize,
    /// Offset of the run in the second text.
    pub b: usize,
    /// Length of the run in bytes.
    pub size: usize,
}

/// Pre-indexed pair of texts ready for block alignment.
///
/// Building the matcher indexes `b` once; [`Matcher::matching_blocks`] and
/// [`Matcher::find_longest_match`] can then be called any number of times.
pub struct Matcher<'t> {
    a: &'t [u8],
    b: &'t [u8],
    /// Byte of `b` → ascending positions where it occurs.
    b2j: HashMap<u8, Vec<usize>>,
}

impl<'t> Matcher<'t> {
    /// Index `b` for matching against `a`.
    ///
    /// With `autojunk` set and `b` at least 200 bytes long, bytes occurring
    /// more than `len(b) / 100 + 1` times are left out of the index. They
    /// can still join a block when it is extended outward, which mirrors
    /// the default behaviour of the sequence matcher legacy reports were
    /// produced with.
    pub fn new(a: &'t NormalizedText, b: &'t NormalizedText, autojunk: bool) -> Self {
        let a = a.as_bytes();
        let b = b.as_bytes();

        let mut b2j: HashMap<u8, Vec<usize>> = HashMap::new();
        for (j, &byte) in b.iter().enumerate() {
            b2j.entry(byte).or_default().push(j);
        }

        if autojunk && b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= ntest);
        }

        Self { a, b, b2j }
    }

    /// Longest common run in `a[alo..ahi]` × `b[blo..bhi]`.
    ///
    /// Returns a block of size 0 at `(alo, blo)` when the ranges share
    /// nothing.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let (a, b) = (self.a, self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0usize);

        // j2len[j] = length of the common run ending at a[i - 1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let run = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev).copied())
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, run);
                    if run > best_size {
                        best_i = i + 1 - run;
                        best_j = j + 1 - run;
                        best_size = run;
                    }
                }
            }
            j2len = next_j2len;
        }

        // Grow the block over bytes the index left out. Without the
        // popularity filter the block is already maximal and these loops
        // do nothing.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        MatchBlock {
            a: best_i,
            b: best_j,
            size: best_size,
        }
    }

    /// All matching blocks, ordered by offset, non-overlapping, each with
    /// `size > 0`.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut found: Vec<MatchBlock> = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            found.push(m);
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                pending.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
        }
        found.sort_unstable();

        merge_adjacent(found)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Align two normalized texts and return their matching blocks in
/// left-to-right order.
///
/// Total: empty inputs yield an empty list.
pub fn align(a: &NormalizedText, b: &NormalizedText) -> Vec<MatchBlock> {
    align_with(a, b, false)
}

/// [`align`] with the popularity filter switched on or off.
pub fn align_with(a: &NormalizedText, b: &NormalizedText, autojunk: bool) -> Vec<MatchBlock> {
    Matcher::new(a, b, autojunk).matching_blocks()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Fuse `(i, j, k)` and `(i + k, j + k, k2)` into `(i, j, k + k2)`.
fn merge_adjacent(blocks: Vec<MatchBlock>) -> Vec<MatchBlock> {
    let mut merged: Vec<MatchBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                last.size += block.size;
            }
            _ => merged.push(block),
        }
    }
    merged
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
