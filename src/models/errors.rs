//! Error types for the chord sheet model
//!
//! `ModelError` reports a broken caller contract (an id that isn't in the
//! collection, a split outside the block's tokens). `SongError` covers the
//! persistence boundary, where malformed input is expected and reported to
//! the user.

use super::id::Id;
use crate::theory::TheoryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("No element with id {0}")]
    NotFound(Id),

    /// Ids are unique within a collection
    #[error("An element with id {0} is already present")]
    DuplicateId(Id),

    /// An edit must keep the id of the element it rewrites
    #[error("Element {expected} was rewritten with id {found}")]
    IdChanged { expected: Id, found: Id },

    #[error("Split index {index} must fall within [1, {token_count})")]
    InvalidSplitIndex { index: usize, token_count: usize },

    #[error("Malformed id: '{0}'")]
    MalformedId(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SongError {
    /// Input did not match the persisted song shape
    #[error("Invalid song data: {0}")]
    Validation(String),

    #[error("Song could not be serialized: {0}")]
    Serialization(String),

    #[error("Transposition failed: {0}")]
    Transpose(#[from] TheoryError),
}
