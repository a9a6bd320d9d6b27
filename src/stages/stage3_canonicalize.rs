use tracing::{debug, info};

use crate::heuristics::{pick_canonical, regular_forms};
use crate::models::{FrequencyTable, MergeLedger, MergePair, Record};

/// Configuration for Stage 3 singular/plural merging
#[derive(Debug, Clone)]
pub struct CanonicalizeConfig {
    /// How many of the most frequent unigrams are considered
    pub top_k: usize,
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self { top_k: 1000 }
    }
}

/// Result of Stage 3 canonicalization
#[derive(Debug, Clone)]
pub struct CanonicalizationResult {
    /// Pairs applied, in order
    pub ledger: MergeLedger,
    /// Unigram occurrences rewritten across all records
    pub occurrences_rewritten: usize,
}

/// Perform Stage 3: merge regular singular/plural unigram pairs
pub fn canonicalize(
    unigrams: &mut FrequencyTable<String>,
    records: &mut [Record],
    config: &CanonicalizeConfig,
) -> CanonicalizationResult {
    let ledger = plan_merges(unigrams, config.top_k);
    let occurrences_rewritten = apply_merges(&ledger, unigrams, records);

    info!(
        "Canonicalized {} singular/plural pairs ({} occurrences rewritten)",
        ledger.len(),
        occurrences_rewritten
    );

    CanonicalizationResult {
        ledger,
        occurrences_rewritten,
    }
}

/// Decide every merge from one ranking snapshot, without touching the table
///
/// A pair is planned once per visit, so when both the singular and the
/// plural rank in the top `top_k` the same pair is planned twice. The second
/// application moves nothing.
pub fn plan_merges(unigrams: &FrequencyTable<String>, top_k: usize) -> MergeLedger {
    let mut ledger = MergeLedger::default();

    for (word, _) in unigrams.most_common(top_k) {
        let (singular, plural) = regular_forms(&word);
        if !(unigrams.contains(plural.as_str()) && unigrams.contains(singular.as_str())) {
            continue;
        }

        let (removed, added) = pick_canonical(
            &singular,
            unigrams.get(singular.as_str()),
            &plural,
            unigrams.get(plural.as_str()),
        );
        debug!("Planned merge {:?} -> {:?}", removed, added);
        ledger.push(MergePair::new(removed, added));
    }

    ledger
}

/// Apply planned merges in order to the table and every record's unigrams
///
/// Bigram lists are left untouched. Returns the number of unigram
/// occurrences rewritten.
pub fn apply_merges(
    ledger: &MergeLedger,
    unigrams: &mut FrequencyTable<String>,
    records: &mut [Record],
) -> usize {
    let mut rewritten = 0;

    for pair in ledger.iter() {
        unigrams.transfer(&pair.removed, pair.added.clone());
        for record in records.iter_mut() {
            rewritten += record.replace_unigram(&pair.removed, &pair.added);
        }
    }

    rewritten
}
