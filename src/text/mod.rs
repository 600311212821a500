//! Text layer
//!
//! Pure lyric text handling with no knowledge of chords.

pub mod tokenize;

pub use tokenize::{token_count, tokenize};
