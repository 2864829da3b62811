//! Sentence and word tokenization with stopword removal.

use unicode_segmentation::UnicodeSegmentation;

use super::resources::LanguageResources;

/// Sentences and content words of a normalized text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub sentences: Vec<String>,
    /// Words in original order, stopwords removed
    pub words: Vec<String>,
}

/// Splits normalized text using Unicode sentence and word boundaries (UAX #29)
pub struct Tokenizer<'a> {
    resources: &'a LanguageResources,
}

impl<'a> Tokenizer<'a> {
    pub fn new(resources: &'a LanguageResources) -> Self {
        Self { resources }
    }

    /// Tokenize text into sentences and stopword-free words
    pub fn tokenize(&self, text: &str) -> Tokens {
        let sentences = text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        // Every non-whitespace segment is a token, including runs like "______"
        let words = text
            .split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .filter(|w| !self.resources.is_stopword(w))
            .map(str::to_string)
            .collect();

        Tokens { sentences, words }
    }
}
