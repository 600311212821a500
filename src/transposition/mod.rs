pub mod chord;

pub use chord::{transpose_chord, transpose_song, transpose_symbol};
