use tracing::info;

use crate::heuristics::NoiseList;
use crate::models::AggregatedEntry;

/// Configuration for Stage 6 rank filtering
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Keywords always dropped
    pub noise: NoiseList,
    /// Entries must have a frequency strictly above this
    pub min_frequency: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            noise: NoiseList::default(),
            min_frequency: 3.5,
        }
    }
}

/// Result of Stage 6 filtering
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// Surviving entries in ranking order
    pub entries: Vec<AggregatedEntry>,
    pub noise_dropped: usize,
    pub low_frequency_dropped: usize,
}

/// Perform Stage 6: drop noise keywords, then entries too rare to plot
pub fn filter_entries(entries: Vec<AggregatedEntry>, config: &FilterConfig) -> FilterResult {
    let before = entries.len();

    let denoised: Vec<AggregatedEntry> = entries
        .into_iter()
        .filter(|e| !config.noise.contains(&e.keyword))
        .collect();
    let noise_dropped = before - denoised.len();

    let after_noise = denoised.len();
    let kept: Vec<AggregatedEntry> = denoised
        .into_iter()
        .filter(|e| e.frequency as f64 > config.min_frequency)
        .collect();
    let low_frequency_dropped = after_noise - kept.len();

    info!(
        "Filtered keywords: {} kept, {} noise, {} below frequency {}",
        kept.len(),
        noise_dropped,
        low_frequency_dropped,
        config.min_frequency
    );

    FilterResult {
        entries: kept,
        noise_dropped,
        low_frequency_dropped,
    }
}
