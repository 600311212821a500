//! Chord lines
//!
//! A line is an ordered run of chord blocks. Joining the block lyrics gives
//! the line's text, and a line always holds at least one block (an empty
//! line is a single empty block).

use super::block::ChordBlock;
use super::collection::IdList;
use super::errors::ModelError;
use super::id::{Id, Identified};

#[derive(Debug, Clone, PartialEq)]
pub struct ChordLine {
    id: Id,
    blocks: IdList<ChordBlock>,
    /// Section label or timestamp, carried through untouched
    pub label: Option<String>,
}

impl ChordLine {
    /// Empty line: one block with no chord and no lyric
    pub fn new() -> Self {
        Self::from_lyrics("")
    }

    /// Line holding `lyrics` in a single chord-free block
    pub fn from_lyrics(lyrics: impl Into<String>) -> Self {
        Self::from_blocks(vec![ChordBlock::lyric_only(lyrics)])
    }

    /// Line made of the given blocks, in order
    ///
    /// An empty list yields an empty line.
    pub fn from_blocks(blocks: Vec<ChordBlock>) -> Self {
        let mut blocks: IdList<ChordBlock> = blocks.into_iter().collect();
        if blocks.is_empty() {
            blocks = std::iter::once(ChordBlock::lyric_only("")).collect();
        }
        Self {
            id: Id::new(),
            blocks,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn blocks(&self) -> &IdList<ChordBlock> {
        &self.blocks
    }

    /// Mutable access to each block's chord and lyric
    ///
    /// Bypasses the empty-chord merge; use `set_chord` for user edits.
    pub fn blocks_mut(&mut self) -> std::slice::IterMut<'_, ChordBlock> {
        self.blocks.iter_mut()
    }

    pub fn block(&self, block_id: Id) -> Result<&ChordBlock, ModelError> {
        self.blocks.get(block_id)
    }

    /// Full lyric text of the line
    pub fn lyrics(&self) -> String {
        self.blocks.iter().map(|block| block.lyric.as_str()).collect()
    }

    pub fn has_chords(&self) -> bool {
        self.blocks.iter().any(ChordBlock::has_chord)
    }

    /// No lyric text and no chords
    pub fn is_empty(&self) -> bool {
        !self.has_chords() && self.blocks.iter().all(|block| block.lyric.is_empty())
    }

    /// Set the chord of a block
    ///
    /// Clearing the chord of any block but the first merges it into the
    /// previous block: its lyric is appended there and the block goes away.
    pub fn set_chord(&mut self, block_id: Id, chord: &str) -> Result<(), ModelError> {
        let index = self.blocks.index_of(block_id)?;
        self.blocks.replace(block_id, |block| block.with_chord(chord))?;

        if !chord.is_empty() {
            return Ok(());
        }

        let previous_id = match index.checked_sub(1).and_then(|i| self.blocks.get_at(i)) {
            Some(previous) => previous.id(),
            None => return Ok(()),
        };

        let removed = self.blocks.remove(block_id)?;
        self.blocks.replace(previous_id, |previous| {
            previous.with_lyric(format!("{}{}", previous.lyric, removed.lyric))
        })?;
        log::debug!("Merged chordless block {} into {}", block_id, previous_id);
        Ok(())
    }

    /// Split a block before the token at `split_index`
    ///
    /// The new leading block takes the chord and is inserted before the
    /// original, which keeps its id and the chord-free remainder. Returns
    /// the id of the new leading block.
    pub fn split_block(&mut self, block_id: Id, split_index: usize) -> Result<Id, ModelError> {
        let index = self.blocks.index_of(block_id)?;
        let previous_id = index
            .checked_sub(1)
            .and_then(|i| self.blocks.get_at(i))
            .map(|previous| previous.id());

        let preceding = self.blocks.get_mut(block_id)?.split(split_index)?;
        let preceding_id = preceding.id();

        match previous_id {
            Some(previous_id) => self.blocks.insert_after(previous_id, [preceding])?,
            None => self.blocks.insert_at_beginning([preceding])?,
        }
        Ok(preceding_id)
    }

    /// Put `chord` over the token at `token_index` of a block
    ///
    /// Token 0 is the block's own anchor. Any later token splits the block
    /// there first, so the chord lands on the new trailing block.
    pub fn anchor_chord(
        &mut self,
        block_id: Id,
        token_index: usize,
        chord: &str,
    ) -> Result<(), ModelError> {
        if token_index > 0 {
            self.split_block(block_id, token_index)?;
        }
        self.set_chord(block_id, chord)
    }

    /// Replace the line's text
    ///
    /// Identical text is a no-op and keeps every chord. Any other text
    /// collapses the line into one chord-free block: an arbitrary edit can't
    /// be mapped back onto the old block boundaries, so the chords are
    /// dropped and have to be entered again.
    ///
    /// Returns whether the line changed.
    pub fn replace_lyrics(&mut self, lyrics: &str) -> bool {
        if self.lyrics() == lyrics {
            return false;
        }
        if self.has_chords() {
            log::debug!("Lyrics of line {} replaced, dropping its chords", self.id);
        }
        self.blocks = std::iter::once(ChordBlock::lyric_only(lyrics)).collect();
        true
    }

    /// Same blocks (by content) and label, ignoring ids
    pub fn content_equals(&self, other: &ChordLine) -> bool {
        self.label == other.label
            && self.blocks.len() == other.blocks.len()
            && self
                .blocks
                .iter()
                .zip(other.blocks.iter())
                .all(|(a, b)| a.content_equals(b))
    }
}

impl Default for ChordLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Identified for ChordLine {
    fn id(&self) -> Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(blocks: &[(&str, &str)]) -> ChordLine {
        ChordLine::from_blocks(
            blocks
                .iter()
                .map(|(chord, lyric)| ChordBlock::new(*chord, *lyric))
                .collect(),
        )
    }

    fn contents(line: &ChordLine) -> Vec<(String, String)> {
        line.blocks()
            .iter()
            .map(|b| (b.chord.clone(), b.lyric.clone()))
            .collect()
    }

    fn block_id(line: &ChordLine, index: usize) -> Id {
        line.blocks().get_at(index).unwrap().id()
    }

    #[test]
    fn test_lyrics_concatenate_blocks() {
        let l = line(&[("G", "Amazing "), ("C", "grace, how "), ("G", "sweet")]);
        assert_eq!(l.lyrics(), "Amazing grace, how sweet");
        assert!(l.has_chords());
    }

    #[test]
    fn test_new_line_has_one_empty_block() {
        let l = ChordLine::new();
        assert_eq!(l.blocks().len(), 1);
        assert!(l.is_empty());
        assert_eq!(ChordLine::from_blocks(vec![]).blocks().len(), 1);
    }

    #[test]
    fn test_set_chord() {
        let mut l = ChordLine::from_lyrics("hello there");
        let id = block_id(&l, 0);
        l.set_chord(id, "Em").unwrap();
        assert_eq!(contents(&l), vec![("Em".to_string(), "hello there".to_string())]);
    }

    #[test]
    fn test_clearing_chord_merges_into_previous() {
        let mut l = line(&[("G", "Amazing "), ("C", "grace, how "), ("G", "sweet")]);
        let middle = block_id(&l, 1);

        l.set_chord(middle, "").unwrap();

        assert_eq!(l.blocks().len(), 2);
        assert_eq!(
            contents(&l),
            vec![
                ("G".to_string(), "Amazing grace, how ".to_string()),
                ("G".to_string(), "sweet".to_string()),
            ]
        );
        assert!(l.block(middle).is_err());
        assert_eq!(l.lyrics(), "Amazing grace, how sweet");
    }

    #[test]
    fn test_clearing_first_chord_keeps_block() {
        let mut l = line(&[("G", "Amazing "), ("C", "grace")]);
        let first = block_id(&l, 0);
        l.set_chord(first, "").unwrap();
        assert_eq!(l.blocks().len(), 2);
        assert_eq!(l.blocks().first().unwrap().chord, "");
    }

    #[test]
    fn test_set_chord_unknown_block() {
        let mut l = ChordLine::from_lyrics("words");
        let missing = Id::new();
        assert_eq!(l.set_chord(missing, "C"), Err(ModelError::NotFound(missing)));
    }

    #[test]
    fn test_split_block_inserts_before() {
        let mut l = line(&[("A", "one "), ("B7", "my dear we're")]);
        let target = block_id(&l, 1);

        let new_id = l.split_block(target, 4).unwrap();

        assert_eq!(
            contents(&l),
            vec![
                ("A".to_string(), "one ".to_string()),
                ("B7".to_string(), "my dear ".to_string()),
                ("".to_string(), "we're".to_string()),
            ]
        );
        assert_eq!(block_id(&l, 1), new_id);
        assert_eq!(block_id(&l, 2), target);
    }

    #[test]
    fn test_split_first_block() {
        let mut l = line(&[("B7", "my dear we're")]);
        let target = block_id(&l, 0);
        l.split_block(target, 2).unwrap();
        assert_eq!(l.blocks().len(), 2);
        assert_eq!(block_id(&l, 1), target);
        assert_eq!(l.lyrics(), "my dear we're");
    }

    #[test]
    fn test_split_invalid_index_leaves_line_untouched() {
        let mut l = line(&[("B7", "my dear")]);
        let target = block_id(&l, 0);
        assert!(l.split_block(target, 0).is_err());
        assert!(l.split_block(target, 3).is_err());
        assert_eq!(contents(&l), vec![("B7".to_string(), "my dear".to_string())]);
    }

    #[test]
    fn test_split_then_merge_restores_block() {
        let mut l = line(&[("B7", "my dear we're")]);
        let original = l.clone();
        let target = block_id(&l, 0);

        l.split_block(target, 4).unwrap();
        l.set_chord(target, "").unwrap();

        assert!(l.content_equals(&original));
    }

    #[test]
    fn test_anchor_chord_mid_block() {
        let mut l = ChordLine::from_lyrics("it's a test!");
        let target = block_id(&l, 0);

        l.anchor_chord(target, 4, "D").unwrap();

        assert_eq!(
            contents(&l),
            vec![
                ("".to_string(), "it's a ".to_string()),
                ("D".to_string(), "test!".to_string()),
            ]
        );
    }

    #[test]
    fn test_anchor_chord_first_token() {
        let mut l = ChordLine::from_lyrics("it's a test!");
        let target = block_id(&l, 0);
        l.anchor_chord(target, 0, "D").unwrap();
        assert_eq!(l.blocks().len(), 1);
        assert_eq!(l.blocks().first().unwrap().chord, "D");
    }

    #[test]
    fn test_replace_lyrics_identical_is_noop() {
        let mut l = line(&[("G", "Amazing "), ("C", "grace")]);
        let before = l.clone();
        assert!(!l.replace_lyrics("Amazing grace"));
        assert_eq!(l, before);
    }

    #[test]
    fn test_replace_lyrics_drops_chords() {
        let mut l = line(&[("G", "Amazing "), ("C", "grace")]).with_label("Verse 1");
        let id = l.id();

        assert!(l.replace_lyrics("Amazing grace!"));

        assert_eq!(contents(&l), vec![("".to_string(), "Amazing grace!".to_string())]);
        assert_eq!(l.id(), id);
        assert_eq!(l.label.as_deref(), Some("Verse 1"));
    }
}
