//! Reconciles the backend's top-tracks payloads into [`TrackRecord`]s.
//!
//! The backend has shipped three shapes over time: a bare array, an object
//! with `items` (the raw Spotify paging object) and an object with `tracks`.
//! Entries may be raw Spotify track objects (`artists`, `album.images`) or
//! pre-flattened records (`artist`, `albumImage`).

use super::model::{TrackRecord, UNKNOWN_ARTIST, UNKNOWN_TRACK};
use crate::error::{OrbitifyError, Result};
use serde_json::Value;
use tracing::debug;

/// Number of planets in the solar system.
pub const MAX_TRACKS: usize = 7;

/// Picks the track array out of a payload.
///
/// Precedence: bare array, then `items`, then `tracks`. Any other shape is
/// [`OrbitifyError::UnexpectedFormat`].
pub fn resolve_track_array(payload: Value) -> Result<Vec<Value>> {
    match payload {
        Value::Array(entries) => {
            debug!(len = entries.len(), "top-tracks payload is a bare array");
            Ok(entries)
        }
        Value::Object(mut fields) => {
            for key in ["items", "tracks"] {
                if let Some(Value::Array(entries)) = fields.remove(key) {
                    debug!(len = entries.len(), field = key, "top-tracks payload wraps an array");
                    return Ok(entries);
                }
            }
            debug!(keys = ?fields.keys().collect::<Vec<_>>(), "top-tracks object carries no track array");
            Err(OrbitifyError::UnexpectedFormat)
        }
        other => {
            debug!(payload = %other, "top-tracks payload is a scalar");
            Err(OrbitifyError::UnexpectedFormat)
        }
    }
}

/// Maps one payload entry to a record, filling gaps with fallbacks.
pub fn map_track(index: usize, entry: &Value) -> TrackRecord {
    let id = present_text(entry.get("id")).unwrap_or_else(|| format!("track-{index}"));
    let name = present_text(entry.get("name")).unwrap_or_else(|| UNKNOWN_TRACK.to_string());
    let artist = present_text(entry.get("artist"))
        .or_else(|| present_text(entry.pointer("/artists/0/name")))
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());
    let album_image = present_text(entry.get("albumImage"))
        .or_else(|| present_text(entry.pointer("/album/images/0/url")))
        .unwrap_or_default();

    TrackRecord {
        id,
        name,
        artist,
        album_image,
    }
}

/// Resolves, truncates to [`MAX_TRACKS`] and maps a payload.
///
/// An empty result is `Ok(vec![])`; deciding what that means for the user is
/// left to the caller.
pub fn normalize_tracks(payload: Value) -> Result<Vec<TrackRecord>> {
    let entries = resolve_track_array(payload)?;
    Ok(entries
        .iter()
        .take(MAX_TRACKS)
        .enumerate()
        .map(|(index, entry)| map_track(index, entry))
        .collect())
}

/// A field counts as present when it is a non-empty string or a non-zero number.
fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}
