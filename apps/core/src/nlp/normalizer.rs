//! Text normalization.
//!
//! Lowercases, strips punctuation and digit runs, and collapses whitespace so
//! the tokenizer only ever sees lowercase word characters separated by single
//! spaces.

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex: non-word pattern"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid regex: digit pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace pattern"));

/// Normalize raw course text.
///
/// Idempotent: `preprocess(&preprocess(x)) == preprocess(x)`.
pub fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_symbols = NON_WORD.replace_all(&lowered, " ");
    let without_digits = DIGITS.replace_all(&without_symbols, " ");
    WHITESPACE
        .replace_all(&without_digits, " ")
        .trim()
        .to_string()
}
