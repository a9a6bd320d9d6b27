use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A keyword candidate: one word or an ordered pair of adjacent words
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ngram {
    Unigram(String),
    Bigram(String, String),
}

impl Ngram {
    pub fn unigram(word: impl Into<String>) -> Self {
        Self::Unigram(word.into())
    }

    pub fn bigram(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self::Bigram(first.into(), second.into())
    }

    pub fn is_bigram(&self) -> bool {
        matches!(self, Self::Bigram(..))
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unigram(word) => write!(f, "{}", word),
            Self::Bigram(first, second) => write!(f, "{} {}", first, second),
        }
    }
}

/// A normalized watch-history entry
///
/// `title` and `date` are fixed once the normalizer produces the record.
/// The token lists start empty and are filled by the tokenizer; only the
/// unigram list is rewritten afterwards (by canonicalization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Lowercased, punctuation-free title
    pub title: String,
    /// Day the video was watched
    pub date: NaiveDate,
    /// Title words with stop words removed
    #[serde(default)]
    pub unigrams: Vec<String>,
    /// Consecutive pairs of the filtered unigrams
    #[serde(default)]
    pub bigrams: Vec<(String, String)>,
}

impl Record {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            unigrams: Vec::new(),
            bigrams: Vec::new(),
        }
    }

    /// Whether this record's unigram or bigram list contains the n-gram
    pub fn contains(&self, ngram: &Ngram) -> bool {
        match ngram {
            Ngram::Unigram(word) => self.unigrams.iter().any(|u| u == word),
            Ngram::Bigram(first, second) => self
                .bigrams
                .iter()
                .any(|(a, b)| a == first && b == second),
        }
    }

    /// Replace every occurrence of `removed` in the unigram list with `added`
    ///
    /// Returns the number of replacements made.
    pub fn replace_unigram(&mut self, removed: &str, added: &str) -> usize {
        let mut replaced = 0;
        for unigram in self.unigrams.iter_mut().filter(|u| u.as_str() == removed) {
            *unigram = added.to_string();
            replaced += 1;
        }
        replaced
    }
}
