//! Chord blocks
//!
//! A block pairs a chord symbol with the span of lyric text it sits over.
//! The chord always anchors to the block's first token, so moving a chord
//! to the middle of a block means splitting the block there.

use super::errors::ModelError;
use super::id::{Id, Identified};
use crate::text::tokenize;

#[derive(Debug, Clone, PartialEq)]
pub struct ChordBlock {
    id: Id,
    /// Chord symbol, empty when the span carries no chord
    pub chord: String,
    pub lyric: String,
}

impl ChordBlock {
    pub fn new(chord: impl Into<String>, lyric: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            chord: chord.into(),
            lyric: lyric.into(),
        }
    }

    /// Block with lyric text and no chord
    pub fn lyric_only(lyric: impl Into<String>) -> Self {
        Self::new(String::new(), lyric)
    }

    pub fn has_chord(&self) -> bool {
        !self.chord.is_empty()
    }

    /// Tokens of the lyric, for click-to-split hit testing
    pub fn lyric_tokens(&self) -> Vec<&str> {
        tokenize(&self.lyric)
    }

    /// Copy of this block (same id) with a different chord
    pub fn with_chord(&self, chord: impl Into<String>) -> Self {
        Self {
            chord: chord.into(),
            ..self.clone()
        }
    }

    /// Copy of this block (same id) with a different lyric
    pub fn with_lyric(&self, lyric: impl Into<String>) -> Self {
        Self {
            lyric: lyric.into(),
            ..self.clone()
        }
    }

    /// Split this block before the token at `split_index`
    ///
    /// Returns a new block holding this block's chord and the tokens before
    /// the split. This block keeps its id and the remaining tokens, and loses
    /// its chord: the trailing half has no anchor until the user gives it one.
    ///
    /// `split_index` must fall within `[1, token_count)`. Splitting at 0 would
    /// leave an empty leading block.
    pub fn split(&mut self, split_index: usize) -> Result<ChordBlock, ModelError> {
        let tokens = self.lyric_tokens();
        if split_index == 0 || split_index >= tokens.len() {
            return Err(ModelError::InvalidSplitIndex {
                index: split_index,
                token_count: tokens.len(),
            });
        }

        let leading = tokens[..split_index].concat();
        let trailing = tokens[split_index..].concat();

        let preceding = ChordBlock::new(std::mem::take(&mut self.chord), leading);
        self.lyric = trailing;
        Ok(preceding)
    }

    /// Same chord and lyric, ignoring ids
    pub fn content_equals(&self, other: &ChordBlock) -> bool {
        self.chord == other.chord && self.lyric == other.lyric
    }
}

impl Identified for ChordBlock {
    fn id(&self) -> Id {
        self.id
    }
}
