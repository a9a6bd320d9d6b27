use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use crate::error::{Result, TrendError};
use crate::models::{AggregatedEntry, FrequencyTable, Ngram, Record};

/// Configuration for Stage 5 temporal summarization
#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    /// Size of the keyword set taken from the combined ranking
    pub top_n: usize,
}

impl Default for SummarizeConfig {
    fn default() -> Self {
        Self { top_n: 100 }
    }
}

/// Perform Stage 5: temporal centroid and record frequency of top keywords
///
/// Entries come back in ranking order. Frequency is the number of records
/// containing the keyword, not its occurrence count.
pub fn summarize(
    records: &[Record],
    unigrams: &FrequencyTable<String>,
    bigrams: &FrequencyTable<(String, String)>,
    config: &SummarizeConfig,
) -> Result<Vec<AggregatedEntry>> {
    let ranking = combined_ranking(unigrams, bigrams, config.top_n);
    let mut entries = Vec::with_capacity(ranking.len());

    for (ngram, count) in ranking {
        let dates: Vec<NaiveDate> = records
            .iter()
            .filter(|r| r.contains(&ngram))
            .map(|r| r.date)
            .collect();

        let keyword = ngram.to_string();
        let avg_date = average_date(&dates).ok_or_else(|| TrendError::InternalConsistency {
            keyword: keyword.clone(),
        })?;
        debug!(
            "{:?}: {} occurrences in {} records, centred on {}",
            keyword,
            count,
            dates.len(),
            avg_date
        );

        entries.push(AggregatedEntry {
            keyword,
            avg_date,
            frequency: dates.len(),
        });
    }

    info!("Summarized {} keywords", entries.len());
    Ok(entries)
}

/// Top `n` n-grams over both tables
///
/// Unigrams precede bigrams among equal counts; within a table ties keep
/// insertion order. Zero-count entries are skipped.
pub fn combined_ranking(
    unigrams: &FrequencyTable<String>,
    bigrams: &FrequencyTable<(String, String)>,
    n: usize,
) -> Vec<(Ngram, u64)> {
    let unigram_entries = unigrams
        .entries()
        .into_iter()
        .map(|(word, count)| (Ngram::Unigram(word), count));
    let bigram_entries = bigrams
        .entries()
        .into_iter()
        .map(|((a, b), count)| (Ngram::Bigram(a, b), count));

    let mut ranked: Vec<(Ngram, u64)> = unigram_entries
        .chain(bigram_entries)
        .filter(|(_, count)| *count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Earliest date plus the truncated mean day offset from it
///
/// `None` for an empty slice.
pub fn average_date(dates: &[NaiveDate]) -> Option<NaiveDate> {
    let min = *dates.iter().min()?;
    let total: i64 = dates.iter().map(|d| (*d - min).num_days()).sum();
    let mean = total / dates.len() as i64;
    min.checked_add_days(Days::new(mean as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    }

    fn record(title: &str, date: NaiveDate) -> Record {
        let mut record = Record::new(title, date);
        record.unigrams = title.split_whitespace().map(str::to_string).collect();
        record.bigrams = record
            .unigrams
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect();
        record
    }

    #[test]
    fn test_average_date_of_even_spacing() {
        assert_eq!(average_date(&[day(0), day(2), day(4)]), Some(day(2)));
    }

    #[test]
    fn test_average_date_truncates() {
        // offsets 0, 0, 1 -> mean 0.33 -> 0
        assert_eq!(average_date(&[day(5), day(5), day(6)]), Some(day(5)));
        // offsets 0, 1 -> 0.5 -> 0
        assert_eq!(average_date(&[day(1), day(0)]), Some(day(0)));
    }

    #[test]
    fn test_average_date_empty() {
        assert_eq!(average_date(&[]), None);
    }

    #[test]
    fn test_bigram_temporal_mean() {
        let records = vec![
            record("cat video", day(0)),
            record("dog", day(1)),
            record("cat video", day(2)),
            record("cat video", day(4)),
        ];
        let unigrams = FrequencyTable::new();
        let mut bigrams = FrequencyTable::new();
        bigrams.add(("cat".to_string(), "video".to_string()), 3);

        let entries = summarize(&records, &unigrams, &bigrams, &SummarizeConfig::default()).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].keyword, "cat video");
        assert_eq!(entries[0].avg_date, day(2));
        assert_eq!(entries[0].frequency, 3);
    }

    #[test]
    fn test_frequency_counts_records_not_occurrences() {
        let records = vec![record("bye bye bye", day(0)), record("bye", day(2))];
        let mut unigrams = FrequencyTable::new();
        unigrams.add("bye".to_string(), 4);

        let entries = summarize(&records, &unigrams, &FrequencyTable::new(), &SummarizeConfig::default())
            .unwrap();

        assert_eq!(entries[0].frequency, 2);
        assert_eq!(entries[0].avg_date, day(1));
    }

    #[test]
    fn test_unreferenced_keyword_is_internal_error() {
        let records = vec![record("cat", day(0))];
        let mut unigrams = FrequencyTable::new();
        unigrams.add("ghost".to_string(), 1);

        let err = summarize(&records, &unigrams, &FrequencyTable::new(), &SummarizeConfig::default())
            .unwrap_err();

        assert!(matches!(err, TrendError::InternalConsistency { keyword } if keyword == "ghost"));
    }

    #[test]
    fn test_combined_ranking_order() {
        let mut unigrams = FrequencyTable::new();
        unigrams.add("cat".to_string(), 2);
        unigrams.add("empty".to_string(), 0);
        unigrams.add("dog".to_string(), 5);
        let mut bigrams = FrequencyTable::new();
        bigrams.add(("glass".to_string(), "animals".to_string()), 5);
        bigrams.add(("lo".to_string(), "fi".to_string()), 7);

        let ranked: Vec<String> = combined_ranking(&unigrams, &bigrams, 3)
            .into_iter()
            .map(|(ngram, _)| ngram.to_string())
            .collect();

        assert_eq!(ranked, vec!["lo fi", "dog", "glass animals"]);
    }
}
