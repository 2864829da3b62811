//! Keyword extraction by raw term frequency.
//!
//! Words of three characters or fewer are dropped entirely; the rest are
//! counted and ranked by descending frequency, ties keeping first-seen order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of keywords kept by the pipeline
pub const DEFAULT_TOP_N: usize = 30;

/// Words must be strictly longer than this (in characters) to count
const MIN_KEYWORD_CHARS: usize = 3;

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    /// The normalized word
    pub word: String,
    /// Raw frequency in the text (always >= 1)
    pub frequency: usize,
}

/// Frequency-based keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    top_n: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl KeywordExtractor {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank every qualifying word by frequency
    pub fn rank<S: AsRef<str>>(&self, words: &[S]) -> Vec<Keyword> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut ranked: Vec<Keyword> = Vec::new();

        for word in words.iter().map(AsRef::<str>::as_ref) {
            if word.chars().count() <= MIN_KEYWORD_CHARS {
                continue;
            }
            match positions.get(word) {
                Some(&idx) => ranked[idx].frequency += 1,
                None => {
                    positions.insert(word, ranked.len());
                    ranked.push(Keyword {
                        word: word.to_string(),
                        frequency: 1,
                    });
                }
            }
        }

        // Stable: equal frequencies stay in first-seen order
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked
    }

    /// Top keywords with their frequencies, using the configured `top_n`
    pub fn extract(&self, words: &[String]) -> Vec<Keyword> {
        let mut ranked = self.rank(words);
        ranked.truncate(self.top_n);
        ranked
    }

    /// Return the `top_n` most frequent words
    pub fn extract_keywords<S: AsRef<str>>(&self, words: &[S], top_n: usize) -> Vec<String> {
        self.rank(words)
            .into_iter()
            .take(top_n)
            .map(|k| k.word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_order_with_first_seen_ties() {
        let extractor = KeywordExtractor::default();
        let words = [
            "machine", "machine", "learning", "learning", "learning", "data", "science",
        ];

        // "data" has 4 chars and ties with "science"; it is seen first
        assert_eq!(
            extractor.extract_keywords(&words, 3),
            vec!["learning", "machine", "data"]
        );
    }

    #[test]
    fn test_short_words_excluded() {
        let extractor = KeywordExtractor::default();
        let words = ["api", "api", "api", "sql", "rust", "web"];

        assert_eq!(extractor.extract_keywords(&words, 10), vec!["rust"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let extractor = KeywordExtractor::default();
        // 3 characters, 4 bytes
        let words = ["été", "über"];

        assert_eq!(extractor.extract_keywords(&words, 10), vec!["über"]);
    }

    #[test]
    fn test_fewer_than_top_n() {
        let extractor = KeywordExtractor::default();
        let words = ["graph", "tree", "graph"];

        assert_eq!(extractor.extract_keywords(&words, 30), vec!["graph", "tree"]);
    }

    #[test]
    fn test_rank_keeps_frequencies() {
        let extractor = KeywordExtractor::default();
        let words = ["tree", "graph", "graph"];

        let ranked = extractor.rank(&words);
        assert_eq!(
            ranked,
            vec![
                Keyword { word: "graph".into(), frequency: 2 },
                Keyword { word: "tree".into(), frequency: 1 },
            ]
        );
    }

    #[test]
    fn test_extract_uses_configured_top_n() {
        let extractor = KeywordExtractor::new(2);
        let words: Vec<String> = ["alpha", "beta", "gamma", "delta"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let keywords = extractor.extract(&words);
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[0].word, "alpha");
    }

    #[test]
    fn test_empty_input() {
        let extractor = KeywordExtractor::default();
        let words: [&str; 0] = [];
        assert!(extractor.extract_keywords(&words, 5).is_empty());
        assert!(extractor.rank(&words).is_empty());
    }
}
