//! Similarity percentage derived from an alignment.

use crate::align::MatchBlock;
use crate::normalize::NormalizedText;

/// `2 * matched / (len(a) + len(b)) * 100`, rounded to two decimals.
///
/// Two empty texts are identical and score 100.0. The result is always in
/// `[0, 100]` for blocks produced by [`crate::align`].
pub fn score(a: &NormalizedText, b: &NormalizedText, blocks: &[MatchBlock]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let matched: usize = blocks.iter().map(|m| m.size).sum();
    let ratio = 2.0 * matched as f64 / total as f64;
    round2(ratio * 100.0)
}

/// Round to two decimals using the exact binary value of `value`.
///
/// Going through the decimal formatter instead of `(value * 100.0).round()`
/// avoids the extra rounding step of the multiplication, keeping results in
/// step with previously published reports.
pub(crate) fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
