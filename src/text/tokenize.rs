//! Lyric tokenizer
//!
//! Splits a lyric line into the units a chord can be anchored to: whole
//! words (apostrophes included, so "we're" stays one token) and single
//! characters for everything else: each space, tab and punctuation mark is
//! its own token.
//!
//! The split is lossless. Concatenating the tokens in order always gives
//! back the original text.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of word characters or apostrophes, or any single other character
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w'’]+|[^\w'’]").expect("token pattern is a valid regex"));

/// Split lyric text into word, space and punctuation tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Number of tokens in `text`
pub fn token_count(text: &str) -> usize {
    TOKEN_PATTERN.find_iter(text).count()
}
