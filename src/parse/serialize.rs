//! Serialization back to the bracket grammar
//!
//! Produced on every mutation and handed to the persistence collaborator
//! (the JS side stores it in localStorage). Chordless lines are emitted
//! bare, since the bracket grammar requires a non-empty cluster — this
//! keeps parse(serialize(song)) a round trip.

use crate::models::{Line, Song};

/// Serialize one line: `[chords] lyrics`, with `*` prefixed to the
/// cluster for structure markers
pub fn serialize_line(line: &Line) -> String {
    if line.chords.is_empty() {
        return line.lyrics.clone();
    }
    if line.is_structure {
        format!("[*{}] {}", line.chords, line.lyrics)
    } else {
        format!("[{}] {}", line.chords, line.lyrics)
    }
}

/// Serialize the whole song, one row per line
pub fn serialize_song(song: &Song) -> String {
    song.lines
        .iter()
        .map(serialize_line)
        .collect::<Vec<_>>()
        .join("\n")
}
