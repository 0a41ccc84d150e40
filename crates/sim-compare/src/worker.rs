//! Pairwise compare engine.
//!
//! [`CompareEngine`] is the primary entry point. It normalizes every
//! document once, enumerates all pairs `(i, j)` with `i < j`, aligns each
//! pair once and feeds that single alignment to both the scorer and the
//! fragment extractor. Pairs may be processed in parallel with rayon; the
//! report always lists them in enumeration order.

use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use sim_core::{Document, SimError};

use crate::align::align_with;
use crate::fragment::{extract_fragments, MAX_FRAGMENTS};
use crate::normalize::{normalize, NormalizedText};
use crate::result::{DocumentSummary, PairResult, Report};
use crate::score::score;

// ---------------------------------------------------------------------------
// CompareConfig
// ---------------------------------------------------------------------------

/// Runtime configuration for the compare engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Maximum number of shared snippets kept per pair.
    /// Default: 5.
    pub max_fragments: usize,
    /// Leave very frequent bytes of long texts out of the match index.
    /// Only needed to reproduce reports made with that filter.
    /// Default: false.
    pub autojunk: bool,
    /// Compare pairs on the rayon pool instead of the calling thread.
    /// Default: true.
    pub parallel: bool,
    /// Number of rayon worker threads to use when `parallel` is set.
    /// Default: `rayon::current_num_threads()`.
    pub worker_threads: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            max_fragments: MAX_FRAGMENTS,
            autojunk: false,
            parallel: true,
            worker_threads: rayon::current_num_threads(),
        }
    }
}

impl CompareConfig {
    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> sim_core::Result<()> {
        if self.worker_threads == 0 {
            return Err(SimError::Config("worker_threads must be at least 1".to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CompareEngine
// ---------------------------------------------------------------------------

/// Deterministic pairwise compare engine.
///
/// Holds no state between calls; the same input always yields the same
/// pairs, scores and fragments.
#[derive(Debug, Clone, Default)]
pub struct CompareEngine {
    config: CompareConfig,
}

impl CompareEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare every pair of `documents` and produce a [`Report`].
    ///
    /// # Steps
    /// 1. Normalize each document once.
    /// 2. Enumerate pairs `(i, j)`, `i < j`, in nested order.
    /// 3. Align, score and extract fragments for each pair, on the rayon
    ///    pool when configured.
    /// 4. Restore enumeration order and record elapsed wall-clock time.
    ///
    /// Fewer than two documents yield a report with no pairs.
    pub fn compare_all(&self, documents: &[Document]) -> Report {
        let start = Instant::now();

        // Step 1: normalization cache for this pass; read-only from here on.
        let normalized: Vec<NormalizedText> = documents.iter().map(|d| normalize(d.content())).collect();
        let summaries: Vec<DocumentSummary> = documents
            .iter()
            .zip(&normalized)
            .map(|(doc, text)| DocumentSummary {
                name: doc.name().to_string(),
                normalized_len: text.len(),
                digest: text.digest(),
            })
            .collect();

        // Step 2: enumerate.
        let pairs = enumerate_pairs(documents.len());
        info!(documents = documents.len(), pairs = pairs.len(), "comparison pass started");

        // Step 3 & 4.
        let results = if self.config.parallel && pairs.len() > 1 {
            self.compare_parallel(documents, &normalized, &pairs)
        } else {
            pairs
                .iter()
                .map(|&(i, j)| self.compare_normalized(&documents[i], &documents[j], &normalized[i], &normalized[j]))
                .collect()
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(pairs = results.len(), elapsed_ms, "comparison pass finished");

        Report {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            elapsed_ms,
            documents: summaries,
            pairs: results,
        }
    }

    /// Run the pipeline on a single pair.
    pub fn compare_pair(&self, left: &Document, right: &Document) -> PairResult {
        let a = normalize(left.content());
        let b = normalize(right.content());
        self.compare_normalized(left, right, &a, &b)
    }

    /// Align once; score and fragments both read the same blocks.
    fn compare_normalized(
        &self,
        left: &Document,
        right: &Document,
        a: &NormalizedText,
        b: &NormalizedText,
    ) -> PairResult {
        let blocks = align_with(a, b, self.config.autojunk);
        let similarity = score(a, b, &blocks);
        let fragments = extract_fragments(a, &blocks, self.config.max_fragments);
        let matched_chars = blocks.iter().map(|m| m.size).sum();

        debug!(
            left = left.name(),
            right = right.name(),
            blocks = blocks.len(),
            score = similarity,
            "pair compared"
        );

        PairResult {
            left: left.name().to_string(),
            right: right.name().to_string(),
            score: similarity,
            matched_chars,
            fragments,
        }
    }

    fn compare_parallel(
        &self,
        documents: &[Document],
        normalized: &[NormalizedText],
        pairs: &[(usize, usize)],
    ) -> Vec<PairResult> {
        let work = || {
            // Collect (index, result) so order survives the parallel map.
            let mut indexed: Vec<(usize, PairResult)> = pairs
                .par_iter()
                .enumerate()
                .map(|(idx, &(i, j))| {
                    let result =
                        self.compare_normalized(&documents[i], &documents[j], &normalized[i], &normalized[j]);
                    (idx, result)
                })
                .collect();
            indexed.sort_by_key(|(idx, _)| *idx);
            indexed.into_iter().map(|(_, r)| r).collect::<Vec<PairResult>>()
        };

        if self.config.worker_threads == rayon::current_num_threads() {
            return work();
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.worker_threads)
            .build()
        {
            Ok(pool) => pool.install(work),
            Err(err) => {
                warn!(error = %err, "falling back to the global rayon pool");
                work()
            }
        }
    }
}

/// Compare `documents` with the default configuration.
pub fn compare_all(documents: &[Document]) -> Report {
    CompareEngine::default().compare_all(documents)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// All `(i, j)` with `i < j < n`, ordered by `i` then `j`.
fn enumerate_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
