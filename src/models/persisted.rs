//! Persisted song format
//!
//! The stored JSON carries no ids and tags every line and block with a
//! `type` field. Parsing is strict: unknown fields, wrong tags and missing
//! required fields are all rejected, so a document that loads is one this
//! crate could have written.

use super::block::ChordBlock;
use super::line::ChordLine;
use super::song::{Song, SongMetadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineTag {
    ChordLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockTag {
    ChordBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedSong {
    pub metadata: SongMetadata,
    pub elements: Vec<PersistedLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedLine {
    #[serde(rename = "type")]
    pub kind: LineTag,
    pub elements: Vec<PersistedBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersistedBlock {
    #[serde(rename = "type")]
    pub kind: BlockTag,
    pub chord: String,
    pub lyric: String,
}

impl From<&ChordBlock> for PersistedBlock {
    fn from(block: &ChordBlock) -> Self {
        Self {
            kind: BlockTag::ChordBlock,
            chord: block.chord.clone(),
            lyric: block.lyric.clone(),
        }
    }
}

impl From<&ChordLine> for PersistedLine {
    fn from(line: &ChordLine) -> Self {
        Self {
            kind: LineTag::ChordLine,
            elements: line.blocks().iter().map(PersistedBlock::from).collect(),
            label: line.label.clone(),
        }
    }
}

impl From<&Song> for PersistedSong {
    fn from(song: &Song) -> Self {
        Self {
            metadata: song.metadata.clone(),
            elements: song.lines().iter().map(PersistedLine::from).collect(),
        }
    }
}

impl From<PersistedBlock> for ChordBlock {
    fn from(block: PersistedBlock) -> Self {
        ChordBlock::new(block.chord, block.lyric)
    }
}

impl From<PersistedLine> for ChordLine {
    fn from(line: PersistedLine) -> Self {
        // A line always holds a block, so `"elements": []` loads as one empty
        // block and is written back that way. No text or chord is lost.
        let blocks = line.elements.into_iter().map(ChordBlock::from).collect();
        let chord_line = ChordLine::from_blocks(blocks);
        match line.label {
            Some(label) => chord_line.with_label(label),
            None => chord_line,
        }
    }
}

impl From<PersistedSong> for Song {
    fn from(song: PersistedSong) -> Self {
        let lines = song.elements.into_iter().map(ChordLine::from).collect();
        Song::from_lines(lines, song.metadata)
    }
}
