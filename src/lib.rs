//! Chord Sheet Editor WASM Module
//!
//! Core of a browser chord-sheet editor: chords anchored to lyric tokens,
//! enharmonically correct transposition and validated JSON persistence.
//! The `api` module exposes it to JavaScript.

pub mod api;
pub mod models;
pub mod text;
pub mod theory;
pub mod transposition;

// Re-export commonly used types
pub use models::{ChordBlock, ChordLine, Id, ModelError, Song, SongError, SongMetadata};
pub use theory::{Interval, Note, TheoryError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("Logger already initialized: {}", e);
    }

    log::info!("Chord sheet editor WASM module initialized");
}
