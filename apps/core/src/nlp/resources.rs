//! Linguistic resources shared by the tokenizer.
//!
//! The stopword set is built once at startup and handed to the tokenizer,
//! either from the built-in English list or from a configured file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::AppConfig;
use crate::error::{AppError, Result};

/// English stopwords (the NLTK `english` corpus list)
const STOPWORDS_EN: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Stopword resources injected into the tokenizer
#[derive(Debug, Clone)]
pub struct LanguageResources {
    stopwords: HashSet<String>,
}

impl Default for LanguageResources {
    fn default() -> Self {
        Self::english()
    }
}

impl LanguageResources {
    /// Built-in English stopword set
    pub fn english() -> Self {
        Self::from_stopwords(STOPWORDS_EN.iter().copied())
    }

    /// Build resources from an arbitrary stopword list (entries are lowercased)
    pub fn from_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stopwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { stopwords }
    }

    /// Load a newline-separated stopword file.
    ///
    /// Lines starting with `#` are ignored. A missing, unreadable or empty
    /// file is a resource failure: the caller is expected to abort startup.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Resource(format!(
                "Failed to read stopword list {}: {}",
                path.display(),
                e
            ))
        })?;

        let resources = Self::from_stopwords(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        );

        if resources.is_empty() {
            return Err(AppError::Resource(format!(
                "Stopword list {} contains no entries",
                path.display()
            )));
        }

        info!(
            "Loaded {} stopwords from {}",
            resources.len(),
            path.display()
        );
        Ok(resources)
    }

    /// Resources selected by configuration: the configured file if any, else English
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.stopwords_file {
            Some(path) => Self::load(path),
            None => Ok(Self::english()),
        }
    }

    /// Exact-match stopword lookup
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
