use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One singular/plural merge: every `removed` occurrence becomes `added`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergePair {
    pub removed: String,
    pub added: String,
}

impl MergePair {
    pub fn new(removed: impl Into<String>, added: impl Into<String>) -> Self {
        Self {
            removed: removed.into(),
            added: added.into(),
        }
    }
}

/// Merge pairs in the order they were planned and must be applied
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeLedger {
    pub pairs: Vec<MergePair>,
}

impl MergeLedger {
    pub fn push(&mut self, pair: MergePair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergePair> {
        self.pairs.iter()
    }
}

/// A retained keyword with its temporal centroid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    /// Unigram, or bigram joined by a single space
    pub keyword: String,
    /// Mean watch date of the records containing the keyword
    pub avg_date: NaiveDate,
    /// Number of records containing the keyword
    pub frequency: usize,
}
