use tracing::info;

use crate::models::{FrequencyTable, Record};

/// Corpus-wide occurrence counts
#[derive(Debug, Clone, Default)]
pub struct NgramCounts {
    pub unigrams: FrequencyTable<String>,
    pub bigrams: FrequencyTable<(String, String)>,
}

/// Perform Stage 2: count every unigram and bigram occurrence
///
/// Repeats within one title count each time. Nothing is discarded here.
pub fn aggregate(records: &[Record]) -> NgramCounts {
    let mut counts = NgramCounts::default();

    for record in records {
        for unigram in &record.unigrams {
            counts.unigrams.increment(unigram.clone());
        }
        for bigram in &record.bigrams {
            counts.bigrams.increment(bigram.clone());
        }
    }

    info!(
        "Aggregated {} distinct unigrams, {} distinct bigrams",
        counts.unigrams.len(),
        counts.bigrams.len()
    );

    counts
}
