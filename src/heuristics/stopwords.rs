use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use crate::error::{Result, TrendError};

/// Set of words excluded from tokenization
///
/// Matching is exact against lowercase words: titles are lowercased by the
/// normalizer, and every constructor lowercases its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop_words: StopWords) -> Self {
        let mut words: Vec<String> = stop_words.words.into_iter().collect();
        words.sort();
        words
    }
}

impl StopWords {
    /// NLTK's English stop-word corpus
    ///
    /// Entries with apostrophes can never match a cleaned title (punctuation
    /// is stripped first) but are kept so the list stays the published one.
    pub fn english() -> Self {
        Self {
            words: get(LANGUAGE::English).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// No filtering at all
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Load a newline-separated list; blank lines and `#` comments are skipped
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TrendError::io(path, e))?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let stop_words = StopWords::english();
        assert!(stop_words.len() >= 150);
        for word in ["the", "of", "for", "now", "and"] {
            assert!(stop_words.contains(word), "{} should be a stop word", word);
        }
        for word in ["cat", "video", "glass", "chess", "lord", "rings"] {
            assert!(!stop_words.contains(word), "{} should not be a stop word", word);
        }
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let stop_words = StopWords::parse("# custom\nThe\n\n  of \n");
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("of"));
    }

    #[test]
    fn test_deserialize_from_list() {
        let stop_words: StopWords = serde_json::from_str(r#"["live", "Full"]"#).unwrap();
        assert!(stop_words.contains("live"));
        assert!(stop_words.contains("full"));
        assert!(!stop_words.contains("the"));
    }
}
