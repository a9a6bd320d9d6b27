use std::collections::HashSet;

use serde::{Deserialize, Serialize};

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Generic title filler that says nothing about what was watched
const GENERIC_TERMS: &[&str] = &[
    "video",
    "trailer",
    "new",
    "best",
    "official",
    "removed",
    "music",
    "ft",
    "feat",
    "official video",
    "official trailer",
    "music video",
    "official music",
];

/// Keywords dropped from the final ranking regardless of frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NoiseList {
    keywords: HashSet<String>,
}

impl Default for NoiseList {
    /// Numerals "0" to "99", number words "one" to "ten", and generic terms
    fn default() -> Self {
        let numerals = (0..100).map(|n: u32| n.to_string());
        let words = NUMBER_WORDS
            .iter()
            .chain(GENERIC_TERMS)
            .map(|w| w.to_string());
        Self {
            keywords: numerals.chain(words).collect(),
        }
    }
}

impl From<Vec<String>> for NoiseList {
    fn from(keywords: Vec<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

impl From<NoiseList> for Vec<String> {
    fn from(list: NoiseList) -> Self {
        let mut keywords: Vec<String> = list.keywords.into_iter().collect();
        keywords.sort();
        keywords
    }
}

impl NoiseList {
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
