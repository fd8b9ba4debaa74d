use serde::{Deserialize, Serialize};

/// Fallback name for entries without one.
pub const UNKNOWN_TRACK: &str = "Unknown Track";
/// Fallback artist for entries without `artist` or `artists[0].name`.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// Canonical track shape, one planet of the solar system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub id: String,
    pub name: String,
    pub artist: String,
    /// Album artwork URL; empty when the source had none.
    pub album_image: String,
}
