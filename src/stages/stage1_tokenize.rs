use tracing::info;

use crate::heuristics::StopWords;
use crate::models::Record;

/// Perform Stage 1: fill in unigram and bigram lists for every record
pub fn tokenize_corpus(records: &mut [Record], stop_words: &StopWords) {
    let mut unigram_total = 0;
    let mut bigram_total = 0;

    for record in records.iter_mut() {
        tokenize_record(record, stop_words);
        unigram_total += record.unigrams.len();
        bigram_total += record.bigrams.len();
    }

    info!(
        "Tokenized {} records into {} unigrams and {} bigrams",
        records.len(),
        unigram_total,
        bigram_total
    );
}

/// Tokenize one record in place
pub fn tokenize_record(record: &mut Record, stop_words: &StopWords) {
    record.unigrams = unigrams(&record.title, stop_words);
    record.bigrams = bigrams(&record.unigrams);
}

/// Whitespace-separated words of `title` that are not stop words
pub fn unigrams(title: &str, stop_words: &StopWords) -> Vec<String> {
    title
        .split_whitespace()
        .filter(|word| !stop_words.contains(word))
        .map(str::to_string)
        .collect()
}

/// Adjacent pairs of the already-filtered unigrams
///
/// Pairs are taken after stop-word removal, so two words separated only by
/// stop words in the title still form a bigram ("lord of the rings" yields
/// ("lord", "rings")).
pub fn bigrams(unigrams: &[String]) -> Vec<(String, String)> {
    unigrams
        .windows(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect()
}
