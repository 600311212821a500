//! Chord Sheet Editor WASM API
//!
//! The JavaScript-facing surface. The open song lives in a session owned by
//! this module; the UI only ever holds views of it.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, JS value conversion, session lock
//! - `session`: `SongSession`, the testable core behind every call
//! - `types`: view types returned to JS
//! - `song`: song editing functions
//! - `theory`: stateless transposition, tokenizing and settings functions

pub mod helpers;
pub mod session;
pub mod types;
pub mod song;
pub mod theory;

pub use session::{SessionError, SongSession};
pub use song::*;
pub use theory::*;
pub use types::{BlockView, LineView, SongView};
