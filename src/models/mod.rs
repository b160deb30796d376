//! Models module for the chord-sheet editor
//!
//! Data structures shared across parsing, layout, and the WASM API.

pub mod core;
pub mod settings;

// Re-export commonly used types
pub use self::core::{distribute_index, ChordAnchor, Line, Song, SongMetadata};
pub use self::settings::DisplaySettings;
