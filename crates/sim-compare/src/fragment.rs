//! Shared snippets surfaced as evidence of overlap.

use crate::align::MatchBlock;
use crate::normalize::NormalizedText;

/// Number of snippets kept per pair in reports.
pub const MAX_FRAGMENTS: usize = 5;

/// The substrings of `a` covered by `blocks`, in block order, keeping at
/// most `limit` of them.
///
/// Zero-sized blocks and blocks that fall outside `a` are skipped.
pub fn extract_fragments(a: &NormalizedText, blocks: &[MatchBlock], limit: usize) -> Vec<String> {
    blocks
        .iter()
        .filter(|m| m.size > 0)
        .filter_map(|m| a.as_str().get(m.a..m.a + m.size))
        .take(limit)
        .map(str::to_owned)
        .collect()
}
