//! Track domain module.
//!
//! - `model`: the canonical [`TrackRecord`]
//! - `normalize`: payload shape reconciliation and field fallbacks

mod model;
pub mod normalize;

pub use model::{TrackRecord, UNKNOWN_ARTIST, UNKNOWN_TRACK};
pub use normalize::{MAX_TRACKS, map_track, normalize_tracks, resolve_track_array};
