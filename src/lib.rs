//! Chord-Sheet Editor WASM Module
//!
//! Core of an interactive chord-sheet editor: the chord-position model
//! (character-anchored chords with derived pixel offsets), the
//! drag-and-drop relocation protocol, the bracket-grammar parser and
//! serializer, whole-song transposition, and two-column partitioning.
//! Rendering, theming, persistence, and image export live in the JS
//! layer and talk to this crate through the `api` module.

pub mod api;
pub mod layout;
pub mod models;
pub mod ops;
pub mod parse;
pub mod transpose;

// Re-export commonly used types
pub use models::core::*;
pub use models::settings::DisplaySettings;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Chord-sheet editor WASM module initialized");
}
