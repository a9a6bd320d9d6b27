use tracing::{debug, info};

use crate::models::FrequencyTable;

/// Configuration for Stage 4 overlap pruning
#[derive(Debug, Clone)]
pub struct PruneConfig {
    /// How many of the most frequent bigrams are examined
    pub top_k: usize,
    /// Share of a word's occurrences a bigram must account for to absorb it
    pub overlap_threshold: f64,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            top_k: 1000,
            overlap_threshold: 0.3,
        }
    }
}

/// Result of Stage 4 overlap pruning
#[derive(Debug, Clone, Default)]
pub struct PruneResult {
    /// Unigrams deleted because a bigram explains them
    pub unigrams_pruned: Vec<String>,
    /// Bigrams deleted as incidental co-occurrences
    pub bigrams_pruned: Vec<(String, String)>,
}

/// Perform Stage 4: drop signal counted twice by a bigram and its words
///
/// For each top bigram `(w0, w1)` with count `b`, if `count(w0) * threshold
/// <= b` then `w0` is deleted, and only in that case `w1` is tested the same
/// way. Otherwise the bigram itself is deleted. Counts are read live, so a
/// word already deleted by an earlier bigram reads as 0 and always passes.
pub fn prune_overlaps(
    unigrams: &mut FrequencyTable<String>,
    bigrams: &mut FrequencyTable<(String, String)>,
    config: &PruneConfig,
) -> PruneResult {
    let mut result = PruneResult::default();
    let threshold = config.overlap_threshold;

    for (bigram, _) in bigrams.most_common(config.top_k) {
        let (first, second) = &bigram;
        let count = bigrams.get(&bigram) as f64;

        if unigrams.get(first.as_str()) as f64 * threshold <= count {
            if unigrams.remove(first.as_str()).is_some() {
                debug!("Pruned unigram {:?} (absorbed by {:?} {:?})", first, first, second);
                result.unigrams_pruned.push(first.clone());
            }
            // The second word is only examined once the first qualified
            if unigrams.get(second.as_str()) as f64 * threshold <= count
                && unigrams.remove(second.as_str()).is_some()
            {
                debug!("Pruned unigram {:?} (absorbed by {:?} {:?})", second, first, second);
                result.unigrams_pruned.push(second.clone());
            }
        } else {
            bigrams.remove(&bigram);
            result.bigrams_pruned.push(bigram);
        }
    }

    info!(
        "Overlap pruning removed {} unigrams and {} bigrams",
        result.unigrams_pruned.len(),
        result.bigrams_pruned.len()
    );

    result
}
