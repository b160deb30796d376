//! Display configuration passed in explicitly by the rendering layer
//!
//! The core never reaches into ambient UI state: whichever operation
//! needs a font size or toggle receives this value (or the relevant
//! field) as an argument. Anchor math only ever depends on the measured
//! pixel table, which the JS side produces at the current `lyric_size`.

use serde::{Deserialize, Serialize};

/// Read-only presentation settings, mirrored from the settings panel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DisplaySettings {
    pub show_chords: bool,
    pub show_lyrics: bool,
    pub two_columns: bool,

    /// Font sizes in px
    pub chord_size: u32,
    pub lyric_size: u32,

    /// Export surface dimensions in px
    pub container_width: u32,
    pub container_height: u32,

    /// CSS color strings, passed through untouched
    pub background_color: String,
    pub text_color: String,
    pub chord_color: String,

    /// Vertical spacing in px
    pub line_spacing: u32,
    pub chord_spacing: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_chords: true,
            show_lyrics: true,
            two_columns: false,
            chord_size: 18,
            lyric_size: 16,
            container_width: 600,
            container_height: 1000,
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            chord_color: "#6b4f2a".to_string(),
            line_spacing: 10,
            chord_spacing: 5,
        }
    }
}

/// Whether a line's chord row should be rendered at all: structure
/// markers stay visible even with the global toggle off.
pub fn chords_visible(settings: &DisplaySettings, is_structure: bool) -> bool {
    is_structure || settings.show_chords
}
