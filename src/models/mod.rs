//! Chord sheet data model
//!
//! A `Song` is an ordered list of `ChordLine`s, each an ordered list of
//! `ChordBlock`s. Every line and block carries an opaque `Id` so the UI can
//! address it; ids are minted fresh on load and never persisted.

pub mod block;
pub mod collection;
pub mod errors;
pub mod id;
pub mod line;
pub mod persisted;
pub mod song;

// Re-export commonly used types
pub use block::ChordBlock;
pub use collection::IdList;
pub use errors::{ModelError, SongError};
pub use id::{Id, Identified};
pub use line::ChordLine;
pub use persisted::{PersistedBlock, PersistedLine, PersistedSong};
pub use song::{lines_from_text, Song, SongMetadata};
