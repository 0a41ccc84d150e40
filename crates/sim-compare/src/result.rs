//! Report types — the structured output of a comparison pass.
//!
//! Serialized to JSON these are what `simcheck --format json` prints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// PairResult
// ---------------------------------------------------------------------------

/// Comparison outcome for one unordered pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    /// Name of the document that came first in the input.
    pub left: String,
    /// Name of the document that came second in the input.
    pub right: String,
    /// Similarity percentage in [0.0, 100.0], two decimals.
    pub score: f64,
    /// Total length of all matching blocks, in normalized characters.
    pub matched_chars: usize,
    /// Shared snippets taken from the left document's normalized text, in
    /// alignment order; at most the configured fragment limit.
    pub fragments: Vec<String>,
}

// ---------------------------------------------------------------------------
// DocumentSummary
// ---------------------------------------------------------------------------

/// Per-document facts gathered while normalizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub name: String,
    /// Length of the normalized text in characters.
    pub normalized_len: usize,
    /// SHA256 of the normalized text; equal digests mean a 100.0 score.
    pub digest: String,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The top-level output of a single comparison pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Stable unique identifier for this pass (UUIDv4).
    pub run_id: Uuid,
    /// UTC time the pass finished.
    pub generated_at: DateTime<Utc>,
    /// Wall-clock duration of the pass in milliseconds.
    pub elapsed_ms: u64,
    /// Input documents in input order.
    pub documents: Vec<DocumentSummary>,
    /// One entry per pair `(i, j)` with `i < j`, ordered by `i` then `j`.
    pub pairs: Vec<PairResult>,
}

impl Report {
    /// `true` when there were fewer than two documents to compare.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up the result for two documents, in either order.
    pub fn pair(&self, a: &str, b: &str) -> Option<&PairResult> {
        self.pairs
            .iter()
            .find(|p| (p.left == a && p.right == b) || (p.left == b && p.right == a))
    }

    /// Pairs whose score is at least `threshold`, highest first. Pairs with
    /// equal scores keep their enumeration order.
    pub fn ranked(&self, threshold: f64) -> Vec<&PairResult> {
        let mut ranked: Vec<&PairResult> = self.pairs.iter().filter(|p| p.score >= threshold).collect();
        ranked.sort_by(|x, y| y.score.partial_cmp(&x.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
