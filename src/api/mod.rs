//! Chord-sheet editor WASM API
//!
//! The JavaScript-facing surface. The crate owns the canonical song;
//! JS supplies user input and text measurements and renders the views
//! these functions return.
//!
//! # Module Structure
//!
//! - `helpers`: serde_wasm_bindgen marshaling with error logging
//! - `core`: song storage plus document-level operations (load,
//!   serialize, bulk replace, metadata)
//! - `lines`: per-line field edits and line insertion/removal
//! - `chords`: drag-and-drop relocation and transposition
//! - `layout`: pixel recomputation, drop resolution, column views

pub mod helpers;

pub mod chords;
pub mod core;
pub mod layout;
pub mod lines;

pub use self::chords::{move_chord, reset_transposition, transpose_song};
pub use self::core::{
    default_display_settings, export_song_json, get_song, load_song, replace_song_text,
    serialize_song_text, set_song_metadata,
};
pub use self::layout::{recompute_line_pixels, resolve_drop_position, split_columns};
pub use self::lines::{
    add_line, indent_lyrics, insert_line_after, remove_line, set_line_chords, set_line_lyrics,
    set_line_structure, unindent_lyrics,
};
