//! Layout: pixel positioning of anchors and column partitioning
//!
//! The crate never shapes text itself. The rendering layer measures the
//! lyric string at the current font and hands back a cumulative pixel
//! table; everything here is arithmetic over that table.

pub mod columns;
pub mod metrics;

pub use columns::split_columns;
pub use metrics::{recompute_pixels, resolve_drop, CharMetrics, FALLBACK_ANCHOR_STEP_PX};
