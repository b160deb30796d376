//! Text grammar for chord sheets
//!
//! The bracket grammar `[chords] lyrics` is both the import and the
//! export format; there is no other wire protocol. Parsing degrades
//! softly: anything that doesn't match a chord cluster is lyrics.

pub mod bulk;
pub mod serialize;

pub use bulk::parse_bulk;
pub use serialize::{serialize_line, serialize_song};
