use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, TrendError};
use crate::heuristics::{NoiseList, StopWords};
use crate::models::{AggregatedEntry, MergeLedger, RawRecord};
use crate::stages::{
    aggregate, canonicalize, filter_entries, normalize_corpus, prune_overlaps, summarize,
    tokenize_corpus, CanonicalizeConfig, FilterConfig, NormalizeConfig, PruneConfig,
    SummarizeConfig,
};

/// Every tunable of a trend-extraction run
///
/// Deserializes from JSON with any field omitted falling back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Candidate pool for singular/plural merging
    pub merge_top_k: usize,
    /// Candidate pool for overlap pruning
    pub prune_top_k: usize,
    /// Keywords passed to temporal summarization
    pub final_top_n: usize,
    pub overlap_threshold: f64,
    pub min_frequency: f64,
    pub stop_words: StopWords,
    pub noise_words: NoiseList,
    /// Characters of marker text ("Watched") cut from each title
    pub title_prefix_len: usize,
    /// Marks a title as an unavailable video
    pub unavailable_prefix: String,
}

impl Default for TrendConfig {
    fn default() -> Self {
        let normalize = NormalizeConfig::default();
        Self {
            merge_top_k: 1000,
            prune_top_k: 1000,
            final_top_n: 100,
            overlap_threshold: 0.3,
            min_frequency: 3.5,
            stop_words: StopWords::english(),
            noise_words: NoiseList::default(),
            title_prefix_len: normalize.title_prefix_len,
            unavailable_prefix: normalize.unavailable_prefix,
        }
    }
}

impl TrendConfig {
    /// Load a JSON config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TrendError::io(path, e))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.overlap_threshold > 0.0 && self.overlap_threshold <= 1.0) {
            return Err(TrendError::InvalidConfig {
                reason: format!("overlap_threshold {} not in (0, 1]", self.overlap_threshold),
            });
        }
        if self.merge_top_k == 0 || self.prune_top_k == 0 || self.final_top_n == 0 {
            return Err(TrendError::InvalidConfig {
                reason: "top-k sizes must be positive".to_string(),
            });
        }
        if self.min_frequency.is_nan() {
            return Err(TrendError::InvalidConfig {
                reason: "min_frequency is NaN".to_string(),
            });
        }
        Ok(())
    }

    pub fn normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            title_prefix_len: self.title_prefix_len,
            unavailable_prefix: self.unavailable_prefix.clone(),
        }
    }

    pub fn canonicalize_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            top_k: self.merge_top_k,
        }
    }

    pub fn prune_config(&self) -> PruneConfig {
        PruneConfig {
            top_k: self.prune_top_k,
            overlap_threshold: self.overlap_threshold,
        }
    }

    pub fn summarize_config(&self) -> SummarizeConfig {
        SummarizeConfig {
            top_n: self.final_top_n,
        }
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            noise: self.noise_words.clone(),
            min_frequency: self.min_frequency,
        }
    }
}

/// Counters collected across one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub total_records: usize,
    pub unavailable_dropped: usize,
    pub merges_applied: usize,
    pub unigrams_pruned: usize,
    pub bigrams_pruned: usize,
    pub noise_dropped: usize,
    pub low_frequency_dropped: usize,
}

/// Output of a full run
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// Final keywords in ranking order
    pub entries: Vec<AggregatedEntry>,
    /// Singular/plural merges that were applied
    pub ledger: MergeLedger,
    pub stats: RunStats,
}

/// Run every stage over a raw corpus
///
/// Fails on the first malformed row. An empty corpus is not an error and
/// yields no entries.
pub fn extract_trends(raw: &[RawRecord], config: &TrendConfig) -> Result<TrendReport> {
    config.validate()?;

    let normalized = normalize_corpus(raw, &config.normalize_config())?;
    let mut records = normalized.records;

    tokenize_corpus(&mut records, &config.stop_words);
    let mut counts = aggregate(&records);

    let canonical = canonicalize(&mut counts.unigrams, &mut records, &config.canonicalize_config());
    let pruned = prune_overlaps(&mut counts.unigrams, &mut counts.bigrams, &config.prune_config());

    let summary = summarize(
        &records,
        &counts.unigrams,
        &counts.bigrams,
        &config.summarize_config(),
    )?;
    let filtered = filter_entries(summary, &config.filter_config());

    let stats = RunStats {
        total_records: normalized.total_records,
        unavailable_dropped: normalized.unavailable_dropped,
        merges_applied: canonical.ledger.len(),
        unigrams_pruned: pruned.unigrams_pruned.len(),
        bigrams_pruned: pruned.bigrams_pruned.len(),
        noise_dropped: filtered.noise_dropped,
        low_frequency_dropped: filtered.low_frequency_dropped,
    };
    info!(
        "Extracted {} keywords from {} records",
        filtered.entries.len(),
        stats.total_records
    );

    Ok(TrendReport {
        entries: filtered.entries,
        ledger: canonical.ledger,
        stats,
    })
}

/// Corpus statistics shown by the `analyze` command
#[derive(Debug, Clone)]
pub struct CorpusAnalysis {
    pub total_records: usize,
    pub unavailable_dropped: usize,
    pub unavailable_fraction: f64,
    pub top_unigrams: Vec<(String, u64)>,
    pub top_bigrams: Vec<((String, String), u64)>,
    /// Top unigrams once singular/plural pairs are merged
    pub top_canonical_unigrams: Vec<(String, u64)>,
    pub merges: MergeLedger,
}

/// Normalize, tokenize and count a corpus without pruning or filtering
pub fn analyze_corpus(raw: &[RawRecord], config: &TrendConfig, top: usize) -> Result<CorpusAnalysis> {
    let normalized = normalize_corpus(raw, &config.normalize_config())?;
    let unavailable_fraction = normalized.unavailable_fraction();
    let mut records = normalized.records;

    tokenize_corpus(&mut records, &config.stop_words);
    let mut counts = aggregate(&records);
    let top_unigrams = counts.unigrams.most_common(top);
    let top_bigrams = counts.bigrams.most_common(top);

    let canonical = canonicalize(&mut counts.unigrams, &mut records, &config.canonicalize_config());

    Ok(CorpusAnalysis {
        total_records: normalized.total_records,
        unavailable_dropped: normalized.unavailable_dropped,
        unavailable_fraction,
        top_unigrams,
        top_bigrams,
        top_canonical_unigrams: counts.unigrams.most_common(top),
        merges: canonical.ledger,
    })
}
