//! View types handed to JavaScript
//!
//! Unlike the persisted form, views carry ids so the UI can address lines
//! and blocks in later calls, and pre-split lyric tokens for click targets.

use crate::models::{ChordBlock, ChordLine, Identified, Song, SongMetadata};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BlockView {
    pub id: String,
    pub chord: String,
    pub lyric: String,
    pub tokens: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LineView {
    pub id: String,
    pub label: Option<String>,
    pub lyrics: String,
    pub blocks: Vec<BlockView>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SongView {
    pub metadata: SongMetadata,
    pub lines: Vec<LineView>,
}

impl From<&ChordBlock> for BlockView {
    fn from(block: &ChordBlock) -> Self {
        Self {
            id: block.id().to_string(),
            chord: block.chord.clone(),
            lyric: block.lyric.clone(),
            tokens: block.lyric_tokens().into_iter().map(String::from).collect(),
        }
    }
}

impl From<&ChordLine> for LineView {
    fn from(line: &ChordLine) -> Self {
        Self {
            id: line.id().to_string(),
            label: line.label.clone(),
            lyrics: line.lyrics(),
            blocks: line.blocks().iter().map(BlockView::from).collect(),
        }
    }
}

impl From<&Song> for SongView {
    fn from(song: &Song) -> Self {
        Self {
            metadata: song.metadata.clone(),
            lines: song.lines().iter().map(LineView::from).collect(),
        }
    }
}
